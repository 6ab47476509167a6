// Domain layer - Value types exchanged across the transport boundary
pub mod history;
pub mod prediction;
