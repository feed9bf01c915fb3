// Fixed-size page slicing over the filtered sequence

pub const PAGE_SIZE: usize = 10;

// Number of pages needed for `len` items; zero when there is nothing to show
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

// Returns the 1-based `page` of `items`. Pages outside the sequence
// (including page 0) come back empty instead of failing.
pub fn slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

// Clamps a requested page into [1, total]; an empty result still shows page 1
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn pages_cover_the_sequence_exactly() {
        for n in [1usize, 7, 10, 20, 23, 101] {
            let items: Vec<usize> = (0..n).collect();
            let pages = total_pages(n, PAGE_SIZE);
            let lengths: Vec<usize> = (1..=pages).map(|p| slice(&items, p, PAGE_SIZE).len()).collect();
            assert_eq!(lengths.iter().sum::<usize>(), n);

            let expected_last = if n % PAGE_SIZE == 0 { PAGE_SIZE } else { n % PAGE_SIZE };
            assert_eq!(*lengths.last().unwrap(), expected_last);

            let rejoined: Vec<usize> = (1..=pages).flat_map(|p| slice(&items, p, PAGE_SIZE).to_vec()).collect();
            assert_eq!(rejoined, items);
        }
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items = [1, 2, 3];
        assert!(slice(&items, 0, PAGE_SIZE).is_empty());
        assert!(slice(&items, 2, PAGE_SIZE).is_empty());
        assert!(slice(&items, usize::MAX, PAGE_SIZE).is_empty());
        assert!(slice::<u8>(&[], 1, PAGE_SIZE).is_empty());
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
