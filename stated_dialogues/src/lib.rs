pub mod controller;
pub mod dialogues;
