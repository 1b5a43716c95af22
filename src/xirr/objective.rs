//! Net present value of normalized cash flows and its rate derivative
//!
//! Uses an actual/365 year: a flow `d` days after the origin is discounted
//! by `(1 + r)^(-d / 365)`.

use super::power::signed_pow;
use crate::cashflow::NormalizedFlow;

/// Days per year in the discounting convention
pub const DAYS_PER_YEAR: f64 = 365.0;

/// NPV objective bound to a fixed set of flows
#[derive(Debug, Clone, Copy)]
pub struct NpvObjective<'a> {
    flows: &'a [NormalizedFlow],
    origin: i64,
}

impl<'a> NpvObjective<'a> {
    /// Discount to the first flow's offset (0 for freshly normalized flows)
    pub fn new(flows: &'a [NormalizedFlow]) -> Self {
        let origin = flows.first().map(|f| f.day_offset).unwrap_or(0);
        Self { flows, origin }
    }

    pub fn flows(&self) -> &'a [NormalizedFlow] {
        self.flows
    }

    /// Signed year fraction from a flow back to the origin
    fn exponent(&self, flow: &NormalizedFlow) -> f64 {
        (self.origin - flow.day_offset) as f64 / DAYS_PER_YEAR
    }

    /// Net present value at `rate`
    pub fn npv(&self, rate: f64) -> f64 {
        self.flows
            .iter()
            .map(|flow| flow.amount * signed_pow(1.0 + rate, self.exponent(flow)))
            .sum()
    }

    /// First derivative of [`npv`](Self::npv) with respect to `rate`
    pub fn derivative(&self, rate: f64) -> f64 {
        self.flows
            .iter()
            .map(|flow| {
                let t = self.exponent(flow);
                t * flow.amount * signed_pow(1.0 + rate, t - 1.0)
            })
            .sum()
    }

    /// Both values in one pass
    pub fn npv_and_derivative(&self, rate: f64) -> (f64, f64) {
        let mut npv = 0.0;
        let mut dnpv = 0.0;

        for flow in self.flows {
            let t = self.exponent(flow);
            npv += flow.amount * signed_pow(1.0 + rate, t);
            dnpv += t * flow.amount * signed_pow(1.0 + rate, t - 1.0);
        }

        (npv, dnpv)
    }
}
