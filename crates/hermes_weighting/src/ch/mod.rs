use crate::weighting::Weighting;

pub mod ch_edge;
pub mod routing_ch_edge;
pub mod shortcut;

/// Name of the file holding the contraction hierarchy prepared for `weighting`
pub fn ch_file_name<W: Weighting + ?Sized>(weighting: &W) -> String {
    format!("ch_{}", weighting.file_name())
}
