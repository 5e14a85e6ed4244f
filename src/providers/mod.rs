pub mod rage4;
