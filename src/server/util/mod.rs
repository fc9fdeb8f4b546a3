pub mod deadline;
pub mod extract;
pub mod parse;
pub mod respond;
