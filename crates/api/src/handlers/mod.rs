pub mod dog;
