// src/ingest/media.rs
//! Publisher display names for Korean outlets, keyed by registrable
//! domain label. Outlets not in the table fall back to the label itself.

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use url::Url;

static MEDIA_NAMES: &[(&str, &str)] = &[
    // national dailies
    ("chosun", "조선일보"),
    ("donga", "동아일보"),
    ("joongang", "중앙일보"),
    ("hani", "한겨레"),
    ("khan", "경향신문"),
    ("kmib", "국민일보"),
    ("segye", "세계일보"),
    ("munhwa", "문화일보"),
    ("seoul", "서울신문"),
    ("hankookilbo", "한국일보"),
    ("naeil", "내일신문"),
    ("dt", "디지털타임스"),
    ("heraldcorp", "헤럴드경제"),
    ("koreaherald", "코리아헤럴드(영문)"),
    ("koreatimes", "코리아타임스(영문)"),
    ("yonhapnews", "연합뉴스"),
    ("yna", "연합뉴스"),
    ("newsis", "뉴시스"),
    // business and tech
    ("mk", "매일경제"),
    ("hankyung", "한국경제"),
    ("sedaily", "서울경제"),
    ("mt", "머니투데이"),
    ("edaily", "이데일리"),
    ("fnnews", "파이낸셜뉴스"),
    ("asiae", "아시아경제"),
    ("asiatoday", "아시아투데이"),
    ("etnews", "전자신문"),
    ("etoday", "이투데이"),
    ("zdnet", "ZDNet Korea"),
    ("ddaily", "디지털데일리"),
    ("bloter", "블로터"),
    ("bizwatch", "비즈워치"),
    ("news1", "뉴스1"),
    ("newsway", "뉴스웨이"),
    ("newspim", "뉴스핌"),
    ("imeconomynews", "시장경제"),
    ("thebell", "더벨"),
    ("businesspost", "비즈니스포스트"),
    ("bizhankook", "비즈한국"),
    ("metroseoul", "메트로신문"),
    ("segyebiz", "세계비즈"),
    // broadcasters
    ("kbs", "KBS"),
    ("imbc", "MBC"),
    ("sbs", "SBS"),
    ("ytn", "YTN"),
    ("mbn", "MBN"),
    ("ichannela", "채널A"),
    ("tbs", "TBS"),
    ("obsnews", "OBS"),
    // magazines and online
    ("sisain", "시사IN"),
    ("sisajournal", "시사저널"),
    ("dailian", "데일리안"),
    ("ohmynews", "오마이뉴스"),
    ("pressian", "프레시안"),
    ("mediatoday", "미디어오늘"),
    ("viewsnnews", "뷰스앤뉴스"),
    ("newdaily", "뉴데일리"),
    ("goodmorningcc", "굿모닝충청"),
    ("sisaweek", "시사위크"),
    ("shindonga", "신동아"),
    // games and sports
    ("inven", "인벤"),
    ("thisisgame", "디스이즈게임"),
    ("gamemeca", "게임메카"),
    ("gamechosun", "게임조선"),
    ("sportsseoul", "스포츠서울"),
    ("sportalkorea", "스포탈코리아"),
    ("mydaily", "마이데일리"),
    ("stoo", "스포츠투데이"),
    ("spotvnews", "SPOTV NEWS"),
    // regional
    ("busan", "부산일보"),
    ("idomin", "경남도민일보"),
    ("gnnews", "경남신문"),
    ("kwnews", "강원일보"),
    ("kado", "강원도민일보"),
    ("idaegu", "대구일보"),
    ("yeongnam", "영남일보"),
    ("imaeil", "매일신문(대구)"),
    ("joongdo", "중도일보(대전/충청)"),
    ("cctoday", "충청투데이"),
    ("ccnnews", "CCN뉴스"),
    ("jbnews", "중부매일"),
    ("jnilbo", "광주일보"),
    ("kjdaily", "광주매일신문"),
    ("jnnews", "전남일보"),
    ("jeonmae", "전국매일신문"),
    ("jjilbo", "전주일보"),
    ("jjan", "전북일보"),
    ("jejusori", "제주의소리"),
    ("jejunews", "제주신문"),
    ("jejutwn", "제주교통복지신문"),
    ("kyeongin", "경인일보"),
    ("incheonilbo", "인천일보"),
    ("kihoilbo", "기호일보"),
    ("ggilbo", "금강일보"),
    ("gukjenews", "국제뉴스"),
    ("newsjeju", "뉴스제주"),
    // specialty
    ("lawtimes", "법률신문"),
    ("lawissue", "로이슈"),
    ("g-enews", "글로벌이코노믹"),
    ("thefact", "더팩트"),
    ("daum", "다음"),
    ("tokenpost", "토큰포스트"),
    ("energy-news", "에너지신문"),
    ("irobotnews", "로봇신문"),
    ("aitimes", "AI타임즈"),
    ("ccdn", "충청매일"),
];

fn media_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceCell<HashMap<&'static str, &'static str>> = OnceCell::new();
    TABLE.get_or_init(|| MEDIA_NAMES.iter().copied().collect())
}

/// Registrable-domain label of `host`: skips a leading `www.` and the
/// two-part Korean suffixes (`co.kr`, `go.kr`, ...).
fn registrable_label(host: &str) -> Option<&str> {
    let host = host.strip_prefix("www.").unwrap_or(host);
    let labels: Vec<&str> = host.split('.').collect();
    let n = labels.len();
    if n < 2 || labels.iter().any(|l| l.is_empty()) {
        return None;
    }
    let two_part_kr = labels[n - 1] == "kr"
        && matches!(labels[n - 2], "co" | "or" | "go" | "ne" | "re" | "pe" | "ac");
    if n >= 3 && two_part_kr {
        Some(labels[n - 3])
    } else {
        Some(labels[n - 2])
    }
}

/// Publisher display name for an article URL. Unknown outlets fall back
/// to the bare domain label; unparseable URLs yield "".
pub fn media_name_from_url(link: &str) -> String {
    let parsed = match Url::parse(link) {
        Ok(u) => u,
        Err(_) => return String::new(),
    };
    let host = match parsed.host_str() {
        Some(h) => h,
        None => return String::new(),
    };
    match registrable_label(host) {
        Some(label) => media_table()
            .get(label)
            .map(|name| (*name).to_string())
            .unwrap_or_else(|| label.to_string()),
        None => String::new(),
    }
}
