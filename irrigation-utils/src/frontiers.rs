#[derive(Debug, Clone, PartialEq)]
pub enum ParetoCompare {
    ADominatesB,
    Equal,
    BDominatesA,
}

/// Compares two objective points under minimization: a point dominates when
/// it is lower in at least one coordinate and higher in none.
pub fn pareto_compare(a: &[f64], b: &[f64]) -> ParetoCompare {
    let mut a_dominate_b = false;
    let mut b_dominate_a = false;
    for (a_val, b_val) in a.iter().zip(b) {
        if a_val < b_val {
            a_dominate_b = true;
        } else if a_val > b_val {
            b_dominate_a = true;
        }
    }
    if a_dominate_b == b_dominate_a {
        ParetoCompare::Equal
    } else if a_dominate_b {
        ParetoCompare::ADominatesB
    } else {
        ParetoCompare::BDominatesA
    }
}

/// Returns the ascending indices of the non-dominated points. Points that
/// compare Equal (including exact duplicates) are all retained.
pub fn pareto_frontier_indices(points: &[Vec<f64>]) -> Vec<usize> {
    let mut dominated = vec![false; points.len()];

    for i in 0..points.len() {
        if dominated[i] {
            continue;
        }
        for j in 0..points.len() {
            if i == j || dominated[j] {
                continue;
            }
            match pareto_compare(&points[i], &points[j]) {
                ParetoCompare::ADominatesB => {
                    dominated[j] = true;
                }
                ParetoCompare::BDominatesA => {
                    dominated[i] = true;
                    break;
                }
                ParetoCompare::Equal => {}
            }
        }
    }

    (0..points.len()).filter(|&i| !dominated[i]).collect()
}
