//! Domain layer: the amount type, the wallet that guards a balance, and the
//! operation records replayed against it.

pub mod bitcoin;
pub mod operation;
pub mod wallet;
