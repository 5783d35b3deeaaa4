use crate::scoring::{ScoreBand, Severity};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each rated 0–3. Total 0–21.
pub fn gad7() -> Instrument {
    Instrument::new(
        "gad7",
        "GAD-7 - Generalized Anxiety Disorder",
        "Kecemasan",
        &[
            "Merasa gugup, cemas, atau tegang?",
            "Tidak dapat menghentikan atau mengontrol kekhawatiran?",
            "Terlalu khawatir tentang berbagai hal?",
            "Kesulitan bersantai?",
            "Merasa gelisah sehingga sulit duduk diam?",
            "Mudah terganggu atau lekas marah?",
            "Merasa seolah-olah sesuatu yang buruk akan terjadi?",
        ],
        vec![
            ScoreBand::upto(4, "Kecemasan minimal", Severity::Minimal),
            ScoreBand::upto(9, "Kecemasan ringan", Severity::Mild),
            ScoreBand::upto(14, "Kecemasan sedang", Severity::Moderate),
            ScoreBand::above("Kecemasan berat", Severity::Severe),
        ],
    )
}
