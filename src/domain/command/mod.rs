pub mod summon;
