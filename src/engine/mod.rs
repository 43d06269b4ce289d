pub mod r#assert;
