pub mod mineskin;
