// Core module - The two operations
pub mod boolean;
pub mod power;
