use crate::models::ExternalTypeInfo;
use crate::models::solution::{DriverDeltas, ExternalDeltas, RunState};
use tinyvec::TinyVec;

/// Returns changes of external types caused by shift count changes of their members.
pub fn external_deltas(state: &RunState, drivers: &DriverDeltas) -> ExternalDeltas {
    let problem = state.problem();

    let shift_count_changes = drivers
        .iter()
        .filter_map(|(slot, delta)| problem.drivers[*slot].external_type().map(|type_index| (type_index, delta.shift_count)))
        .fold(TinyVec::<[(usize, i64); 2]>::default(), |mut acc, (type_index, shift_count)| {
            match acc.iter_mut().find(|(other, _)| *other == type_index) {
                Some((_, total)) => *total += shift_count,
                None => acc.push((type_index, shift_count)),
            }
            acc
        });

    shift_count_changes
        .into_iter()
        .filter(|(_, shift_count)| *shift_count != 0)
        .map(|(type_index, shift_count)| {
            let external_type = &problem.external_types[type_index];
            let old_count = state.external_info(type_index).shift_count;

            let old_info = ExternalTypeInfo::with_shift_count(external_type, old_count);
            let new_info = ExternalTypeInfo::with_shift_count(external_type, old_count + shift_count);

            (type_index, new_info - old_info)
        })
        .collect()
}
