use crate::error::Result;
use crate::models::violation::NormalizedRecord;
use crate::network::XrayClient;
use crate::normalize::normalize;

/// Violations fetched per listing request.
pub const PAGE_SIZE: u64 = 50;

/// Tracks progress through the paginated listing.
///
/// The server reports the total result count on every page; the cursor keeps
/// the most recently observed value, so a total that moves mid-run shifts
/// the termination point with it.
#[derive(Debug)]
pub struct PaginationCursor {
    page: u64,
    page_size: u64,
    total_count: u64,
    exhausted: bool,
}

impl PaginationCursor {
    pub fn new(page_size: u64) -> Self {
        PaginationCursor {
            page: 1,
            page_size,
            total_count: 0,
            exhausted: false,
        }
    }

    /// 1-based index of the page to request next.
    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Records the server-reported total after a page fetch and re-evaluates
    /// whether the listing is exhausted.
    pub fn record_total(&mut self, total_count: u64) {
        self.total_count = total_count;
        self.exhausted = self.page * self.page_size >= total_count;
    }

    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn advance(&mut self) {
        self.page += 1;
    }
}

/// Everything collected for one watch: the learned total plus the flattened
/// records in discovery order.
#[derive(Debug)]
pub struct WatchViolations {
    pub total_violations: u64,
    pub records: Vec<NormalizedRecord>,
}

/// Walks every listing page for `watch`, resolving and flattening each
/// violation as it is discovered.
///
/// Requests run strictly one at a time, details in listing order; the
/// upstream API is not built for parallel bursts. Any failed request or
/// malformed page aborts the run and discards what was collected.
pub fn collect_watch_violations(client: &XrayClient, watch: &str) -> Result<WatchViolations> {
    let mut cursor = PaginationCursor::new(PAGE_SIZE);
    let mut records = Vec::new();

    loop {
        let page = client.violations_page(watch, cursor.page_size(), cursor.page())?;
        cursor.record_total(page.total_violations);

        println!(
            "⏳ Page {}: resolving {} violations ({} total reported)",
            cursor.page(),
            page.violations.len(),
            cursor.total_count()
        );

        for summary in &page.violations {
            let detail = client.violation_details(&summary.violation_details_url)?;
            records.push(normalize(&detail));
        }

        if cursor.exhausted() {
            break;
        }
        cursor.advance();
    }

    Ok(WatchViolations {
        total_violations: cursor.total_count(),
        records,
    })
}
