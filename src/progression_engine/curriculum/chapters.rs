//! The 114 chapters (surah) with their verse counts, in mushaf order.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub id: u16,
    pub name: &'static str,
    pub verses: u16,
}

pub const CHAPTER_COUNT: u16 = 114;

/// Look up a chapter by its 1-based id.
pub fn chapter(id: u16) -> Option<&'static Chapter> {
    if id == 0 {
        return None;
    }
    CHAPTERS.get(id as usize - 1)
}

/// Verse count of a chapter, or 0 for an unknown id.
pub fn verse_count(id: u16) -> u16 {
    chapter(id).map(|c| c.verses).unwrap_or(0)
}

pub static CHAPTERS: [Chapter; 114] = [
    Chapter { id:   1, name: "Al-Fatihah", verses: 7 },
    Chapter { id:   2, name: "Al-Baqarah", verses: 286 },
    Chapter { id:   3, name: "Ali 'Imran", verses: 200 },
    Chapter { id:   4, name: "An-Nisa'", verses: 176 },
    Chapter { id:   5, name: "Al-Ma'idah", verses: 120 },
    Chapter { id:   6, name: "Al-An'am", verses: 165 },
    Chapter { id:   7, name: "Al-A'raf", verses: 206 },
    Chapter { id:   8, name: "Al-Anfal", verses: 75 },
    Chapter { id:   9, name: "At-Taubah", verses: 129 },
    Chapter { id:  10, name: "Yunus", verses: 109 },
    Chapter { id:  11, name: "Hud", verses: 123 },
    Chapter { id:  12, name: "Yusuf", verses: 111 },
    Chapter { id:  13, name: "Ar-Ra'd", verses: 43 },
    Chapter { id:  14, name: "Ibrahim", verses: 52 },
    Chapter { id:  15, name: "Al-Hijr", verses: 99 },
    Chapter { id:  16, name: "An-Nahl", verses: 128 },
    Chapter { id:  17, name: "Al-Isra'", verses: 111 },
    Chapter { id:  18, name: "Al-Kahf", verses: 110 },
    Chapter { id:  19, name: "Maryam", verses: 98 },
    Chapter { id:  20, name: "Taha", verses: 135 },
    Chapter { id:  21, name: "Al-Anbiya'", verses: 112 },
    Chapter { id:  22, name: "Al-Hajj", verses: 78 },
    Chapter { id:  23, name: "Al-Mu'minun", verses: 118 },
    Chapter { id:  24, name: "An-Nur", verses: 64 },
    Chapter { id:  25, name: "Al-Furqan", verses: 77 },
    Chapter { id:  26, name: "Asy-Syu'ara'", verses: 227 },
    Chapter { id:  27, name: "An-Naml", verses: 93 },
    Chapter { id:  28, name: "Al-Qasas", verses: 88 },
    Chapter { id:  29, name: "Al-'Ankabut", verses: 69 },
    Chapter { id:  30, name: "Ar-Rum", verses: 60 },
    Chapter { id:  31, name: "Luqman", verses: 34 },
    Chapter { id:  32, name: "As-Sajdah", verses: 30 },
    Chapter { id:  33, name: "Al-Ahzab", verses: 73 },
    Chapter { id:  34, name: "Saba'", verses: 54 },
    Chapter { id:  35, name: "Fatir", verses: 45 },
    Chapter { id:  36, name: "Yasin", verses: 83 },
    Chapter { id:  37, name: "As-Saffat", verses: 182 },
    Chapter { id:  38, name: "Sad", verses: 88 },
    Chapter { id:  39, name: "Az-Zumar", verses: 75 },
    Chapter { id:  40, name: "Gafir", verses: 85 },
    Chapter { id:  41, name: "Fussilat", verses: 54 },
    Chapter { id:  42, name: "Asy-Syura", verses: 53 },
    Chapter { id:  43, name: "Az-Zukhruf", verses: 89 },
    Chapter { id:  44, name: "Ad-Dukhan", verses: 59 },
    Chapter { id:  45, name: "Al-Jasiyah", verses: 37 },
    Chapter { id:  46, name: "Al-Ahqaf", verses: 35 },
    Chapter { id:  47, name: "Muhammad", verses: 38 },
    Chapter { id:  48, name: "Al-Fath", verses: 29 },
    Chapter { id:  49, name: "Al-Hujurat", verses: 18 },
    Chapter { id:  50, name: "Qaf", verses: 45 },
    Chapter { id:  51, name: "Az-Zariyat", verses: 60 },
    Chapter { id:  52, name: "At-Tur", verses: 49 },
    Chapter { id:  53, name: "An-Najm", verses: 62 },
    Chapter { id:  54, name: "Al-Qamar", verses: 55 },
    Chapter { id:  55, name: "Ar-Rahman", verses: 78 },
    Chapter { id:  56, name: "Al-Waqi'ah", verses: 96 },
    Chapter { id:  57, name: "Al-Hadid", verses: 29 },
    Chapter { id:  58, name: "Al-Mujadilah", verses: 22 },
    Chapter { id:  59, name: "Al-Hasyr", verses: 24 },
    Chapter { id:  60, name: "Al-Mumtahanah", verses: 13 },
    Chapter { id:  61, name: "As-Saff", verses: 14 },
    Chapter { id:  62, name: "Al-Jumu'ah", verses: 11 },
    Chapter { id:  63, name: "Al-Munafiqun", verses: 11 },
    Chapter { id:  64, name: "At-Tagabun", verses: 18 },
    Chapter { id:  65, name: "At-Talaq", verses: 12 },
    Chapter { id:  66, name: "At-Tahrim", verses: 12 },
    Chapter { id:  67, name: "Al-Mulk", verses: 30 },
    Chapter { id:  68, name: "Al-Qalam", verses: 52 },
    Chapter { id:  69, name: "Al-Haqqah", verses: 52 },
    Chapter { id:  70, name: "Al-Ma'arij", verses: 44 },
    Chapter { id:  71, name: "Nuh", verses: 28 },
    Chapter { id:  72, name: "Al-Jinn", verses: 28 },
    Chapter { id:  73, name: "Al-Muzzammil", verses: 20 },
    Chapter { id:  74, name: "Al-Muddassir", verses: 56 },
    Chapter { id:  75, name: "Al-Qiyamah", verses: 40 },
    Chapter { id:  76, name: "Al-Insan", verses: 31 },
    Chapter { id:  77, name: "Al-Mursalat", verses: 50 },
    Chapter { id:  78, name: "An-Naba'", verses: 40 },
    Chapter { id:  79, name: "An-Nazi'at", verses: 46 },
    Chapter { id:  80, name: "'Abasa", verses: 42 },
    Chapter { id:  81, name: "At-Takwir", verses: 29 },
    Chapter { id:  82, name: "Al-Infitar", verses: 19 },
    Chapter { id:  83, name: "Al-Mutaffifin", verses: 36 },
    Chapter { id:  84, name: "Al-Insyiqaq", verses: 25 },
    Chapter { id:  85, name: "Al-Buruj", verses: 22 },
    Chapter { id:  86, name: "At-Tariq", verses: 17 },
    Chapter { id:  87, name: "Al-A'la", verses: 19 },
    Chapter { id:  88, name: "Al-Gasyiyah", verses: 26 },
    Chapter { id:  89, name: "Al-Fajr", verses: 30 },
    Chapter { id:  90, name: "Al-Balad", verses: 20 },
    Chapter { id:  91, name: "Asy-Syams", verses: 15 },
    Chapter { id:  92, name: "Al-Lail", verses: 21 },
    Chapter { id:  93, name: "Ad-Duha", verses: 11 },
    Chapter { id:  94, name: "Asy-Syarh", verses: 8 },
    Chapter { id:  95, name: "At-Tin", verses: 8 },
    Chapter { id:  96, name: "Al-'Alaq", verses: 19 },
    Chapter { id:  97, name: "Al-Qadr", verses: 5 },
    Chapter { id:  98, name: "Al-Bayyinah", verses: 8 },
    Chapter { id:  99, name: "Az-Zalzalah", verses: 8 },
    Chapter { id: 100, name: "Al-'Adiyat", verses: 11 },
    Chapter { id: 101, name: "Al-Qari'ah", verses: 11 },
    Chapter { id: 102, name: "At-Takasur", verses: 8 },
    Chapter { id: 103, name: "Al-'Asr", verses: 3 },
    Chapter { id: 104, name: "Al-Humazah", verses: 9 },
    Chapter { id: 105, name: "Al-Fil", verses: 5 },
    Chapter { id: 106, name: "Quraisy", verses: 4 },
    Chapter { id: 107, name: "Al-Ma'un", verses: 7 },
    Chapter { id: 108, name: "Al-Kausar", verses: 3 },
    Chapter { id: 109, name: "Al-Kafirun", verses: 6 },
    Chapter { id: 110, name: "An-Nasr", verses: 3 },
    Chapter { id: 111, name: "Al-Lahab", verses: 5 },
    Chapter { id: 112, name: "Al-Ikhlas", verses: 4 },
    Chapter { id: 113, name: "Al-Falaq", verses: 5 },
    Chapter { id: 114, name: "An-Nas", verses: 6 },
];
