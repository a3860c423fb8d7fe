// Swap step types shared with the pool contract

/// Outcome of moving the price by one bounded step
///
/// `amount_in_consumed` is the post-fee input the curve actually absorbed.
/// When the step stops at the price bound it is smaller than the input
/// offered and the caller refunds the difference.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapStep {
    pub next_sqrt_price: u128,
    pub amount_in_consumed: u128,
    pub amount_out: u128,
}
