//! Wizard input structures and JSON loading

mod data;
pub mod loader;

pub use data::{
    BusinessGoal, Classroom, ExpenseCategory, ExpenseItem, FinancialInput, RevenueSource,
};
pub use loader::{load_input, load_input_from_reader, load_inputs, parse_input};
