use crate::scoring::{ScoreBand, Severity};
use crate::Instrument;

/// BAI: Beck Anxiety Inventory.
/// 21 somatic and emotional symptoms, each rated 0–3. Total 0–63.
///
/// The category carries a stray leading space; the catalog trims it at load
/// time and logs a warning.
pub fn bai() -> Instrument {
    Instrument::new(
        "bai",
        "BAI - Beck Anxiety Inventory",
        // TODO: drop the leading space once clinical owners confirm BAI belongs under "Kecemasan".
        " Kecemasan",
        &[
            "Mati rasa atau kesemutan?",
            "Merasa panas?",
            "Kaki gemetar?",
            "Tidak dapat bersantai?",
            "Takut hal terburuk akan terjadi?",
            "Pusing atau kepala ringan?",
            "Jantung berdebar kencang?",
            "Tidak stabil?",
            "Merasa ketakutan?",
            "Gugup?",
            "Merasa tersedak?",
            "Tangan gemetar?",
            "Gemetar?",
            "Takut kehilangan kendali?",
            "Kesulitan bernapas?",
            "Takut mati?",
            "Merasa takut?",
            "Gangguan pencernaan?",
            "Merasa pingsan?",
            "Wajah memerah?",
            "Berkeringat (tidak karena panas)?",
        ],
        vec![
            ScoreBand::upto(21, "Kecemasan minimal", Severity::Minimal),
            ScoreBand::upto(35, "Kecemasan ringan", Severity::Mild),
            ScoreBand::upto(48, "Kecemasan sedang", Severity::Moderate),
            ScoreBand::above("Kecemasan berat", Severity::Severe),
        ],
    )
}
