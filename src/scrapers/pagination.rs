use crate::scrapers::page::PaginationState;

/// Whether another page should be requested.
///
/// Both must hold: the site reports more matches than it has shown so far,
/// and the shown count is still below `max_results`.
pub fn should_continue(range_to: u32, total_count: u32, max_results: u32) -> bool {
    total_count > range_to && range_to < max_results
}

impl PaginationState {
    pub fn has_more(&self, max_results: u32) -> bool {
        should_continue(self.range_to, self.total_count, max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continues_when_more_results_below_cap() {
        assert!(should_continue(100, 250, 1000));
    }

    #[test]
    fn test_stops_at_cap_even_with_more_results() {
        assert!(!should_continue(1000, 5000, 1000));
        assert!(!should_continue(1100, 5000, 1000));
    }

    #[test]
    fn test_stops_when_all_results_shown() {
        assert!(!should_continue(250, 250, 1000));
        assert!(!should_continue(4, 4, 1000));
    }

    #[test]
    fn test_has_more() {
        let state = PaginationState {
            range_to: 100,
            total_count: 250,
        };
        assert!(state.has_more(1000));
        assert!(!state.has_more(100));
    }
}
