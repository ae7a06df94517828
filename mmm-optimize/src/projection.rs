//! Euclidean projection onto the feasible polytope
//! `{ x : Σ x_i = budget, l_i <= x_i <= u_i }`.

/// Project `y` onto the budget-sum polytope with box bounds.
///
/// The projection is `x_i = clamp(y_i - λ, l_i, u_i)` for the shift λ
/// solving `Σ x_i = budget`; `Σ clamp(y_i - λ, l_i, u_i)` is
/// non-increasing in λ, so λ is found by bisection. Feasibility
/// (`Σ l <= budget <= Σ u`) must be checked by the caller.
pub fn project_onto_budget(y: &[f64], lower: &[f64], upper: &[f64], budget: f64) -> Vec<f64> {
    debug_assert_eq!(y.len(), lower.len());
    debug_assert_eq!(y.len(), upper.len());

    let sum_at = |lambda: f64| -> f64 {
        y.iter()
            .zip(lower.iter().zip(upper.iter()))
            .map(|(&yi, (&li, &ui))| (yi - lambda).clamp(li, ui))
            .sum()
    };

    // At lo every coordinate hits its upper bound, at hi its lower bound.
    let mut lo = y
        .iter()
        .zip(upper.iter())
        .map(|(yi, ui)| yi - ui)
        .fold(f64::INFINITY, f64::min);
    let mut hi = y
        .iter()
        .zip(lower.iter())
        .map(|(yi, li)| yi - li)
        .fold(f64::NEG_INFINITY, f64::max);

    for _ in 0..128 {
        let mid = 0.5 * (lo + hi);
        if sum_at(mid) > budget {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let lambda = 0.5 * (lo + hi);

    let mut x: Vec<f64> = y
        .iter()
        .zip(lower.iter().zip(upper.iter()))
        .map(|(&yi, (&li, &ui))| (yi - lambda).clamp(li, ui))
        .collect();

    // Spread any bisection residual over the coordinates with slack so
    // the equality constraint holds to machine precision. The share is
    // only applied once every remaining coordinate can absorb it at the
    // same denominator, so no coordinate leaves its box.
    let residual = budget - x.iter().sum::<f64>();
    if residual != 0.0 {
        let mut free: Vec<usize> = (0..x.len())
            .filter(|&i| x[i] > lower[i] && x[i] < upper[i])
            .collect();
        while !free.is_empty() {
            let share = residual / free.len() as f64;
            let absorbing: Vec<usize> = free
                .iter()
                .copied()
                .filter(|&i| x[i] + share >= lower[i] && x[i] + share <= upper[i])
                .collect();
            if absorbing.len() == free.len() {
                for &i in &absorbing {
                    x[i] += share;
                }
                break;
            }
            free = absorbing;
        }
    }
    x
}
