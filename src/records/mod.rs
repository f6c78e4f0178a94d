pub mod person;

pub use person::{PERSON_SIZE, Person};
