pub mod origins;
