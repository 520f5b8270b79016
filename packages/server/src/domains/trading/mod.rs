pub mod simulator;

pub use simulator::{MintRequest, TradeError, TradeKind, TradeReceipt, TradeSimulator};
