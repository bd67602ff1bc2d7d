pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Offset pagination derived from untrusted `page` / `limit` query values.
///
/// Parsing never fails: a missing, non-numeric or non-positive value falls
/// back to its default, and `limit` is clamped to [`MAX_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        let limit = if limit == 0 { DEFAULT_PAGE_SIZE } else { limit };

        Self {
            page: page.max(1),
            limit: limit.min(MAX_PAGE_SIZE),
        }
    }

    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page.and_then(parse_positive).unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .and_then(parse_positive)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    pub fn total_pages(&self, total_items: u64) -> u64 {
        total_items.div_ceil(u64::from(self.limit))
    }
}

/// Reads the leading integer of `raw` the way lenient query parsers do:
/// surrounding whitespace is ignored and anything after the digits is
/// dropped, so `"3abc"` is 3 and `"2.5"` is 2. Returns `None` for values
/// below 1 or beyond `u32`.
fn parse_positive(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 || negative {
        return None;
    }

    rest[..digits_len].parse::<u32>().ok().filter(|value| *value >= 1)
}
