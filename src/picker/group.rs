//! Artist grouping with a random group order

use crate::model::Track;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Keep each artist's tracks together, shuffling the order of artists
///
/// Tracks of one artist stay in their original relative order. Tracks
/// without an artist form a group of their own. Shuffling the groups keeps
/// repeated runs from always listing the same artists first.
pub fn group_by_artist<R: Rng + ?Sized>(tracks: Vec<Track>, rng: &mut R) -> Vec<Track> {
    let total = tracks.len();
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<Track>> = Vec::new();

    for track in tracks {
        let slot = match slots.get(&track.artist) {
            Some(&slot) => slot,
            None => {
                slots.insert(track.artist.clone(), groups.len());
                groups.push(Vec::new());
                groups.len() - 1
            }
        };
        groups[slot].push(track);
    }

    log::debug!("Grouped {} tracks into {} artists", total, groups.len());

    groups.shuffle(rng);
    groups.into_iter().flatten().collect()
}
