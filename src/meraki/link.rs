//! `Link` response header parsing (RFC 8288)
//!
//! Meraki paginates with headers like:
//! `<https://n1.meraki.com/api/v1/networks/N_1/clients?perPage=1000&startingAfter=a>; rel=first, <...>; rel=next`

/// URL of the first link whose relation types include `rel`.
pub(crate) fn find_link(header: &str, rel: &str) -> Option<String> {
    let mut rest = header;
    while let Some(open) = rest.find('<') {
        let after_open = &rest[open + 1..];
        let close = after_open.find('>')?;
        let url = after_open[..close].trim();
        let params_and_more = &after_open[close + 1..];
        let params_end = params_and_more.find('<').unwrap_or(params_and_more.len());
        let params = &params_and_more[..params_end];

        if params
            .split(';')
            .filter_map(|param| param.split_once('='))
            .filter(|(key, _)| key.trim().eq_ignore_ascii_case("rel"))
            .any(|(_, value)| {
                value
                    .trim()
                    .trim_end_matches(',')
                    .trim()
                    .trim_matches('"')
                    .split_ascii_whitespace()
                    .any(|r| r.eq_ignore_ascii_case(rel))
            })
        {
            return Some(url.to_string());
        }

        rest = &params_and_more[params_end..];
    }
    None
}

pub(crate) fn next_link(header: &str) -> Option<String> {
    find_link(header, "next")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_next_among_several_links() {
        let header = "<https://n1.meraki.com/api/v1/networks/N_1/clients?perPage=1000>; rel=first, \
                      <https://n1.meraki.com/api/v1/networks/N_1/clients?perPage=1000&startingAfter=k1>; rel=next, \
                      <https://n1.meraki.com/api/v1/networks/N_1/clients?perPage=1000&endingBefore=z>; rel=last";
        assert_eq!(
            next_link(header).as_deref(),
            Some("https://n1.meraki.com/api/v1/networks/N_1/clients?perPage=1000&startingAfter=k1")
        );
    }

    #[test]
    fn last_page_has_no_next() {
        let header = "<https://api.test/clients?a=1>; rel=first, <https://api.test/clients?b=2>; rel=prev";
        assert_eq!(next_link(header), None);
    }

    #[test]
    fn quoted_and_multi_valued_rel() {
        assert_eq!(
            next_link(r#"<https://api.test/p2>; rel="next""#).as_deref(),
            Some("https://api.test/p2")
        );
        assert_eq!(
            next_link(r#"<https://api.test/p2>; title="x"; rel="prefetch next""#).as_deref(),
            Some("https://api.test/p2")
        );
    }

    #[test]
    fn rel_is_case_insensitive_and_spacing_tolerant() {
        assert_eq!(
            next_link("<https://api.test/p2> ;REL = NEXT").as_deref(),
            Some("https://api.test/p2")
        );
    }

    #[test]
    fn url_with_comma_is_kept_whole() {
        assert_eq!(
            next_link("<https://api.test/p?ids=1,2>; rel=next").as_deref(),
            Some("https://api.test/p?ids=1,2")
        );
    }

    #[test]
    fn empty_or_garbage_header_has_no_next() {
        assert_eq!(next_link(""), None);
        assert_eq!(next_link("rel=next"), None);
        assert_eq!(next_link("<https://api.test/unterminated; rel=next"), None);
    }

    #[test]
    fn nextpage_is_not_next() {
        assert_eq!(next_link("<https://api.test/p2>; rel=nextpage"), None);
    }
}
