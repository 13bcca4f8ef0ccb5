use tracing::debug;

use crate::core::pages::{PageSource, Pages};
use crate::core::tally::{DeviceName, DeviceTally};
use crate::error::ApiError;

/// Walk every page of `source` and count distinct device names that start
/// with `prefix`. Any failed page aborts the count; nothing partial is kept.
pub(crate) fn count_devices<S>(source: &S, prefix: &str) -> Result<usize, ApiError>
where
    S: PageSource,
    S::Item: DeviceName,
{
    let mut tally = DeviceTally::new(prefix);
    for (index, page) in Pages::new(source).enumerate() {
        let page = page?;
        let added = tally.extend(&page.items);
        debug!(
            page = index + 1,
            clients = page.items.len(),
            new_devices = added,
            total = tally.len(),
            "processed clients page"
        );
    }
    Ok(tally.len())
}
