//! Extended internal rate of return for irregularly dated cash flows

mod power;
mod objective;
mod solver;
mod calculator;

pub use power::signed_pow;
pub use objective::{NpvObjective, DAYS_PER_YEAR};
pub use solver::{newton_raphson, NewtonSolution};
pub use calculator::{calculate_xirr, XirrCalculator, XirrSolution};
