//! Query filters for the matchlist endpoint

use crate::constants::riot;
use crate::error::AppError;

/// Optional filters for `matchlists/by-account`.
///
/// Index contract of the endpoint, enforced by [`MatchlistFilter::index_range`]:
/// - only `begin_index` given: `end_index` defaults to `begin_index + 100`
/// - only `end_index` given: `begin_index` defaults to 0
/// - both given: `end_index` must be greater than `begin_index`
/// - the range may span at most 100 matches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchlistFilter {
    pub champions: Vec<u32>,
    pub queues: Vec<u32>,
    /// Epoch milliseconds
    pub begin_time: Option<i64>,
    /// Epoch milliseconds
    pub end_time: Option<i64>,
    pub begin_index: Option<u32>,
    pub end_index: Option<u32>,
}

impl MatchlistFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn champions(mut self, champions: impl IntoIterator<Item = u32>) -> Self {
        self.champions = champions.into_iter().collect();
        self
    }

    pub fn queues(mut self, queues: impl IntoIterator<Item = u32>) -> Self {
        self.queues = queues.into_iter().collect();
        self
    }

    pub fn time_range(mut self, begin_time: Option<i64>, end_time: Option<i64>) -> Self {
        self.begin_time = begin_time;
        self.end_time = end_time;
        self
    }

    pub fn index_range_bounds(mut self, begin_index: Option<u32>, end_index: Option<u32>) -> Self {
        self.begin_index = begin_index;
        self.end_index = end_index;
        self
    }

    /// Resolves the index defaults and validates the range.
    /// Returns `None` when neither index is set.
    pub fn index_range(&self) -> Result<Option<(u32, u32)>, AppError> {
        let (begin, end) = match (self.begin_index, self.end_index) {
            (None, None) => return Ok(None),
            (Some(begin), None) => (begin, begin.saturating_add(riot::MATCHLIST_MAX_SPAN)),
            (None, Some(end)) => (0, end),
            (Some(begin), Some(end)) => (begin, end),
        };

        if end <= begin {
            return Err(AppError::invalid_index_range(format!(
                "end index {end} must be greater than begin index {begin}"
            )));
        }
        if end - begin > riot::MATCHLIST_MAX_SPAN {
            return Err(AppError::invalid_index_range(format!(
                "range {begin}..{end} spans {} matches, the maximum is {}",
                end - begin,
                riot::MATCHLIST_MAX_SPAN
            )));
        }
        Ok(Some((begin, end)))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let (Some(begin), Some(end)) = (self.begin_time, self.end_time)
            && begin > end
        {
            return Err(AppError::InvalidTimeRange { begin, end });
        }
        self.index_range().map(|_| ())
    }

    /// Query parameters, each terminated by `&`.
    ///
    /// Single-valued parameters come first (`endTime`, `beginTime`,
    /// `endIndex`, `beginIndex`), then one `champion=` per champion id and
    /// one `queue=` per queue id.
    pub fn query_string(&self) -> Result<String, AppError> {
        self.validate()?;

        let mut query = String::new();
        if let Some(end_time) = self.end_time {
            query.push_str(&format!("endTime={end_time}&"));
        }
        if let Some(begin_time) = self.begin_time {
            query.push_str(&format!("beginTime={begin_time}&"));
        }
        if let Some((begin, end)) = self.index_range()? {
            query.push_str(&format!("endIndex={end}&beginIndex={begin}&"));
        }
        for champion in &self.champions {
            query.push_str(&format!("champion={champion}&"));
        }
        for queue in &self.queues {
            query.push_str(&format!("queue={queue}&"));
        }
        Ok(query)
    }
}

/// Path for a filtered matchlist. It always ends in `?` or `&`, so the API
/// key is appended directly.
pub fn build_matchlist_path(account_id: &str, filter: &MatchlistFilter) -> Result<String, AppError> {
    if account_id.trim().is_empty() {
        return Err(AppError::missing_argument("account id"));
    }
    Ok(format!(
        "{}{}?{}",
        riot::MATCHLIST_BY_ACCOUNT,
        urlencoding::encode(account_id),
        filter.query_string()?
    ))
}

/// Parses a comma separated id list such as `"157, 238,7"`.
/// Empty input yields an empty list.
pub fn parse_id_list(input: &str) -> Result<Vec<u32>, AppError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .map_err(|_| AppError::InvalidIdList(input.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_indices_sends_no_index_parameters() {
        let filter = MatchlistFilter::new();
        assert_eq!(filter.index_range().unwrap(), None);
        assert_eq!(filter.query_string().unwrap(), "");
    }

    #[test]
    fn test_only_begin_index_defaults_end() {
        let filter = MatchlistFilter::new().index_range_bounds(Some(20), None);
        assert_eq!(filter.index_range().unwrap(), Some((20, 120)));
    }

    #[test]
    fn test_only_end_index_defaults_begin() {
        let filter = MatchlistFilter::new().index_range_bounds(None, Some(50));
        assert_eq!(filter.index_range().unwrap(), Some((0, 50)));
    }

    #[test]
    fn test_both_indices_must_be_ordered() {
        let filter = MatchlistFilter::new().index_range_bounds(Some(10), Some(10));
        assert!(matches!(
            filter.index_range(),
            Err(AppError::InvalidIndexRange(_))
        ));

        let filter = MatchlistFilter::new().index_range_bounds(Some(10), Some(5));
        assert!(filter.index_range().is_err());
    }

    #[test]
    fn test_span_limited_to_one_hundred() {
        let filter = MatchlistFilter::new().index_range_bounds(Some(0), Some(100));
        assert_eq!(filter.index_range().unwrap(), Some((0, 100)));

        let filter = MatchlistFilter::new().index_range_bounds(Some(0), Some(101));
        assert!(filter.index_range().is_err());

        let filter = MatchlistFilter::new().index_range_bounds(None, Some(150));
        assert!(filter.index_range().is_err());
    }

    #[test]
    fn test_end_index_zero_alone_is_invalid() {
        let filter = MatchlistFilter::new().index_range_bounds(None, Some(0));
        assert!(filter.index_range().is_err());
    }

    #[test]
    fn test_time_range_validation() {
        let filter = MatchlistFilter::new().time_range(Some(2000), Some(1000));
        assert!(matches!(
            filter.validate(),
            Err(AppError::InvalidTimeRange {
                begin: 2000,
                end: 1000
            })
        ));
        assert!(
            MatchlistFilter::new()
                .time_range(Some(1000), None)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_query_parameter_order() {
        let filter = MatchlistFilter::new()
            .champions([157, 238])
            .queues([420])
            .time_range(Some(1000), Some(2000))
            .index_range_bounds(Some(5), None);

        assert_eq!(
            filter.query_string().unwrap(),
            "endTime=2000&beginTime=1000&endIndex=105&beginIndex=5&champion=157&champion=238&queue=420&"
        );
    }

    #[test]
    fn test_build_matchlist_path() {
        let path = build_matchlist_path("acc-1", &MatchlistFilter::new()).unwrap();
        assert_eq!(path, "/lol/match/v4/matchlists/by-account/acc-1?");

        let filter = MatchlistFilter::new().queues([420]);
        let path = build_matchlist_path("acc-1", &filter).unwrap();
        assert_eq!(path, "/lol/match/v4/matchlists/by-account/acc-1?queue=420&");
    }

    #[test]
    fn test_build_matchlist_path_requires_account() {
        let result = build_matchlist_path("  ", &MatchlistFilter::new());
        assert!(matches!(result, Err(AppError::MissingArgument(_))));
    }

    #[test]
    fn test_parse_id_list() {
        assert_eq!(parse_id_list("157, 238,7").unwrap(), vec![157, 238, 7]);
        assert_eq!(parse_id_list("").unwrap(), Vec::<u32>::new());
        assert_eq!(parse_id_list("420,").unwrap(), vec![420]);
        assert!(matches!(
            parse_id_list("420,ranked"),
            Err(AppError::InvalidIdList(_))
        ));
    }
}
