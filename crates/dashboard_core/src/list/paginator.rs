use contracts::shared::list_query::{PageRequest, PageResult};

use crate::error::QueryError;

/// Split an ordered list into pages.
///
/// A page past the end yields empty `items`; the page number is echoed back
/// unchanged so the caller decides where to navigate.
pub fn paginate<T>(ordered: Vec<T>, request: PageRequest) -> Result<PageResult<T>, QueryError> {
    if request.page_number < 1 {
        return Err(QueryError::invalid("page_number", "must be at least 1"));
    }
    if request.page_size < 1 {
        return Err(QueryError::invalid("page_size", "must be at least 1"));
    }

    let total_matching = ordered.len();
    let total_pages = total_matching.div_ceil(request.page_size);

    let items = if request.page_number > total_pages {
        Vec::new()
    } else {
        ordered
            .into_iter()
            .skip(request.offset())
            .take(request.page_size)
            .collect()
    };

    Ok(PageResult {
        items,
        total_matching,
        total_pages,
        page_number: request.page_number,
    })
}
