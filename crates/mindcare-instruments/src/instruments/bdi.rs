use crate::scoring::{ScoreBand, Severity};
use crate::Instrument;

/// BDI: Beck Depression Inventory.
/// 21 items. Bands follow the BDI-II cut-offs (13 / 19 / 28).
pub fn bdi() -> Instrument {
    Instrument::new(
        "bdi",
        "BDI - Beck Depression Inventory",
        "Depresi",
        &[
            "Merasa sedih, murung, atau tidak bahagia?",
            "Merasa pesimis atau putus asa tentang masa depan?",
            "Merasa gagal atau kecewa dengan diri sendiri?",
            "Kehilangan kepuasan atau kesenangan dalam hidup?",
            "Merasa bersalah secara berlebihan?",
            "Merasa dihukum atau akan dihukum?",
            "Merasa kecewa dengan diri sendiri?",
            "Menyalahkan diri sendiri atas hal-hal yang salah?",
            "Memiliki pikiran untuk bunuh diri?",
            "Menangis lebih sering dari biasanya?",
            "Merasa lebih mudah tersinggung atau marah?",
            "Kehilangan minat pada orang lain?",
            "Kesulitan membuat keputusan?",
            "Merasa penampilan Anda memburuk?",
            "Sulit bekerja atau melakukan aktivitas?",
            "Mengalami gangguan tidur?",
            "Merasa lebih cepat lelah?",
            "Kehilangan nafsu makan?",
            "Khawatir tentang kesehatan fisik?",
            "Kehilangan minat pada seks?",
            "Sulit berkonsentrasi?",
        ],
        vec![
            ScoreBand::upto(13, "Depresi minimal", Severity::Minimal),
            ScoreBand::upto(19, "Depresi ringan", Severity::Mild),
            ScoreBand::upto(28, "Depresi sedang", Severity::Moderate),
            ScoreBand::above("Depresi berat", Severity::Severe),
        ],
    )
}
