use multiversx_sc::imports::*;

/// Returns the sorted middle, or the average of the two middle items when the
/// list has an even number of elements.
pub fn calculate<M: ManagedTypeApi>(list: &mut [BigUint<M>]) -> Option<BigUint<M>> {
    if list.is_empty() {
        return None;
    }
    list.sort_unstable();

    let middle_index = list.len() / 2;
    if list.len() % 2 == 0 {
        // [2.0, 2.1, 2.2, 2.3] -> (2.1 + 2.2) / 2
        let low = list.get(middle_index - 1)?;
        let high = list.get(middle_index)?;
        Some((low + high) / 2u64)
    } else {
        list.get(middle_index).cloned()
    }
}
