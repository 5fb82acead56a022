//! Nearest active core finder
use log::warn;

use crate::{
    prelude::{ActiveSet, Core, CoreId, Position},
    site::{core_lookup, CoreLookup},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closest active [Core] to a given [Position]
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NearestCore {
    /// [CoreId]
    pub core: CoreId,
    /// Distance to the current [Core] position (meters)
    pub distance_m: f64,
}

/// Returns the [NearestCore] among the [ActiveSet], using each [Core]'s
/// current (possibly relocated) position, or None when no active [Core] exists.
/// Ties are resolved in favor of the lowest [CoreId].
pub fn nearest_active_core(
    position: &Position,
    cores: &[Core],
    active: &ActiveSet,
) -> Option<NearestCore> {
    let lookup = core_lookup(cores);
    nearest_in(position, &lookup, active)
}

pub(crate) fn nearest_in(
    position: &Position,
    lookup: &CoreLookup<'_>,
    active: &ActiveSet,
) -> Option<NearestCore> {
    let mut best = Option::<NearestCore>::None;

    for id in active.iter() {
        let core = match lookup.get(id) {
            Some(core) => core,
            None => {
                warn!("active core {} does not exist: skipped", id);
                continue;
            },
        };

        let distance_m = position.distance_m(&core.effective_position());

        // strictly closer: first (lowest id) wins in case of tie
        let closer = match best {
            Some(best) => distance_m.total_cmp(&best.distance_m).is_lt(),
            None => true,
        };

        if closer {
            best = Some(NearestCore {
                core: *id,
                distance_m,
            });
        }
    }

    best
}
