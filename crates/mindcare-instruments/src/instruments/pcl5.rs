use crate::scoring::{ScoreBand, Severity};
use crate::Instrument;

/// PCL-5: PTSD Checklist for DSM-5.
/// 20 items. Published cut-offs are exclusive (< 33, < 45, < 58).
pub fn pcl5() -> Instrument {
    Instrument::new(
        "pcl5",
        "PCL-5 - PTSD Checklist",
        "Trauma / PTSD",
        &[
            "Ingatan berulang yang mengganggu tentang pengalaman stres?",
            "Mimpi buruk berulang tentang pengalaman stres?",
            "Tiba-tiba merasa seolah pengalaman stres terjadi lagi?",
            "Merasa sangat kesal ketika sesuatu mengingatkan pengalaman stres?",
            "Reaksi fisik ketika sesuatu mengingatkan pengalaman stres?",
            "Menghindari ingatan, pikiran, atau perasaan terkait pengalaman stres?",
            "Menghindari hal eksternal yang mengingatkan pengalaman stres?",
            "Kesulitan mengingat bagian penting dari pengalaman stres?",
            "Keyakinan negatif yang kuat tentang diri sendiri atau dunia?",
            "Menyalahkan diri sendiri atau orang lain untuk pengalaman stres?",
            "Perasaan negatif yang kuat (takut, horor, marah, bersalah, malu)?",
            "Kehilangan minat pada aktivitas yang Anda nikmati?",
            "Merasa jauh atau terputus dari orang lain?",
            "Kesulitan mengalami perasaan positif?",
            "Perilaku iritabel, ledakan kemarahan, atau agresi verbal/fisik?",
            "Mengambil terlalu banyak risiko atau melakukan hal berbahaya?",
            "Sangat waspada atau berjaga-jaga?",
            "Mudah terkejut?",
            "Masalah konsentrasi?",
            "Kesulitan jatuh atau tertidur?",
        ],
        vec![
            ScoreBand::upto(32, "Gejala PTSD minimal", Severity::Minimal),
            ScoreBand::upto(44, "Kemungkinan PTSD ringan", Severity::Mild),
            ScoreBand::upto(57, "Kemungkinan PTSD sedang", Severity::Moderate),
            ScoreBand::above("Kemungkinan PTSD berat", Severity::Severe),
        ],
    )
}
