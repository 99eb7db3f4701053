//! Static site copy: every string the page renders, in one place.
//!
//! Purely presentational data; the only logic anywhere near this module is
//! lookup by the rendering shell. External links are opaque URIs handed to
//! the OS browser, never fetched or validated here.

// ─── Identity ────────────────────────────────────────────────────────────────

pub const SITE_TITLE: &str = "Hazel's Animal Talk";
pub const SITE_TITLE_ZH: &str = "毛孩悄悄話";
pub const SITE_TAGLINE_ZH: &str = "連結您與寵物的心靈橋樑";

pub const INSTAGRAM_HANDLE: &str = "hazel_animaltalk";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/hazel_animaltalk/";
pub const EMAIL: &str = "hazel.healing66@gmail.com";
pub const LOCATION: &str = "Taipei, Taiwan";
pub const BOOKING_FORM_URL: &str = "https://forms.gle/JqMtwd3UaZTMYa9p9";
pub const BOOKING_FORM_LONG_URL: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSfFCYgNOFNJhBZd0DFbJ-XjqQ-JYgpQnLBs-XVq9lJBq1DKHA/viewform";

// ─── Loading screen ──────────────────────────────────────────────────────────

pub const LOADING_LINE: &str = "正在準備與您的毛孩展開心靈對話...";

// ─── Hero ────────────────────────────────────────────────────────────────────

pub const HERO_SUBTITLE_ZH: &str = "讓每份陪伴，充滿愛與理解。";
pub const HERO_TAGLINE: &str = "LISTEN. CONNECT. UNDERSTAND.";

// ─── Introduction ────────────────────────────────────────────────────────────

pub const INTRO_HEADING: &str = "什麼是動物溝通？";
pub const INTRO_SUBLINE: &str = "It's not magic. It's listening with the heart.";
pub const INTRO_PARAGRAPHS: [&str; 3] = [
    "『動物溝通』是一種不依賴語言的心靈對話，透過靜心與直覺，聆聽毛孩內在真正的聲音。溝通師會進入安靜、穩定的狀態，用心去接收動物傳遞來的畫面、感受、情緒，進行一場溫柔的交流。",
    "動物擁有細膩的情緒與豐富的內在，只是表達方式不同於人類。透過動物溝通，我們能更貼近牠們的世界，理解牠們的需求與愛，並成為更懂牠的家人。",
    "這不只是人與動物之間的橋樑，更是一段彼此理解、彼此陪伴的療癒旅程。用心傾聽，就能聽見愛的聲音。",
];
pub const INTRO_CTA: &str = "了解更多";

// ─── About ───────────────────────────────────────────────────────────────────

pub const ABOUT_HEADING: &str = "About Hazel";
pub const ABOUT_SUBLINE: &str = "This more than work - it's a way of loving.";
pub const ABOUT_PARAGRAPHS: [&str; 4] = [
    "您好，我是 Hazel，一位陪伴人與動物對話的溝通者。",
    "真正踏上這條路，是因為陪伴我八年多的白文鳥離開了。那是我第一次那麼深刻地經歷失去。被悲傷困住了好一陣子，直到鼓起勇氣找了一位動物溝通師。在那場安靜卻深刻的對話裡，我們一起細數相處的點滴，也慢慢與自己的傷痛和解。而動物唯一的願望，是希望我們能好好生活。",
    "那時突然懂了，我們不必等到最後才說再見。如果能在牠們還在的時候，就好好傾聽與分享，就算只是『今天吃了什麼？』、『睡得安不安穩？』，這些平凡小事，對牠們來說，都是深刻的愛。",
    "希望幫助更多人與動物，搭建起一個美好的橋樑，讓彼此更靠近、更安心。同時，每筆收入的 10% 將捐給友善動物團體，希望透過這份能力，讓愛持續流動。",
];

// ─── Stories ─────────────────────────────────────────────────────────────────

pub const STORIES_HEADING: &str = "來自毛孩的悄悄話";
pub const STORIES_SUBLINES: [&str; 2] = [
    "Real stories. Honest moments.",
    "Gentle connections.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub text: &'static str,
    pub instagram_url: &'static str,
}

pub const STORIES: [Story; 4] = [
    Story {
        text: "已經相處兩三年的『花屁ㄚ』，卻總是與人保持距離。這次，花屁ㄚ試著說出自己的感受，家長也表達了對牠的愛，而幾週後悄悄地有了改變……",
        instagram_url: "https://www.instagram.com/p/DI0cK1Xz1p2/?igsh=MWdoZzUwdHJ4NDA4ZA==",
    },
    Story {
        text: "姊姊投餵的流浪貓『小咪』，慢慢地對這裡產生感情了，原來看似保持距離的相處，原來小咪的心中放著滿滿的感謝～",
        instagram_url: "https://www.instagram.com/p/DIs4cc_THJ4/?img_index=1&igsh=b2pybmY3MG94c3ls",
    },
    Story {
        text: "家長眼中的『動物之間相處不融洽』，原來是因為『糖糖』年紀大了，身體衰退了，找不到喜歡自己的理由了……",
        instagram_url: "https://www.instagram.com/p/DI-jbMNToR4/?igsh=MTVpcjUxeDdwd3Jj",
    },
    Story {
        text: "哥哥姊姊帶『泰迪』回家前，心裡偷偷藏的小心思，還真的瞞不過貓咪！而且他還有自己的一套『貓咪哲學』喔！",
        instagram_url: "https://www.instagram.com/p/DIlUwwUTtLo/?igsh=MTVpcjUxeDdwd3Jj",
    },
];

// ─── Services ────────────────────────────────────────────────────────────────

pub const SERVICES_HEADING: &str = "開啟一段屬於你們的對話";
pub const SERVICES_SUBLINE: &str = "Gentle guidance before we begin.";
pub const BOOKING_BUTTON_TITLE: &str = "預約表單";
pub const BOOKING_BUTTON_SUBTITLE: &str = "Book a session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        title: "服務項目",
        lines: &[
            "— 在世動物溝通 —",
            "收費方式：NT$999/60分鐘。",
            "（每筆訂單10％將捐給友善動物團體。）",
        ],
    },
    ServiceCard {
        title: "預約流程",
        lines: &[
            "1. 了解『什麼是動物溝通？』。",
            "2. 填寫預約表單。",
            "3. 確認時段＆付款。",
            "4. 付款後即預約成功。",
        ],
    },
    ServiceCard {
        title: "溝通須知",
        lines: &[
            "1. 提供動物『看向鏡頭的清晰全身照』3-5張。",
            "2. 為線上『即時文字』溝通。",
            "3. 溝通者需為主要照顧者。",
            "4. 溝通前，須向動物告知有此次溝通。",
            "5. 帶著一顆全然敞開的心，一起聊聊吧！",
        ],
    },
];

// ─── Contact ─────────────────────────────────────────────────────────────────

pub const CONTACT_HEADING: &str = "您正在找的，也許就是這裡";
pub const CONTACT_SUBHEADING: &str = "無論是預約、提問，都歡迎留下訊息。";
pub const CONTACT_SUBLINES: [&str; 2] = ["I'm here —", "Gently, sincerely, always listening."];
pub const CONTACT_INFO_HEADING: &str = "Contact Information";
pub const RESERVATION_LINK_LABEL: &str = "預約表單 - Reservation Form";

// ─── Footer ──────────────────────────────────────────────────────────────────

pub const FOOTER_TAGLINE: &str = "連結您與毛孩的心靈橋樑";
pub const FOOTER_COPYRIGHT: &str = "© 2026 Hazel's Animal Talk. All rights reserved.";

// ─── Detail view (animal-communication Q&A) ──────────────────────────────────

/// Heading the cross-view intent scrolls to; must match the rendered text.
pub const QA_HEADING: &str = "關於動物溝通 Ｑ&Ａ";
pub const WHEN_HEADING: &str = "什麼時候需要動物溝通?";
pub const DETAIL_BACK_LABEL: &str = "返回主頁";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QaItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const QA_ITEMS: [QaItem; 5] = [
    QaItem {
        question: "動物溝通是什麼？",
        answer: "是一種使用心靈直覺感應與動物進行非語言交流的方式。溝通師透過接收圖像、感受、情緒和想法，再中立的轉述，幫助家長更了解動物的想法。",
    },
    QaItem {
        question: "我需要準備什麼嗎？溝通會如何進行呢？",
        answer: "需要提供『動物夥伴』以及『家長』的照片，線上進行即可，不需見面唷！",
    },
    QaItem {
        question: "主人或是動物需要做什麼嗎？",
        answer: "家長只需在約定好的時間上線，輕鬆地與Hazel對話，並適時的給予回饋，像跟朋友聊天一樣，溝通的當下動物在做什麼並不影響唷！",
    },
    QaItem {
        question: "溝通時長大約多久？",
        answer: "首次溝通約60分鐘。",
    },
    QaItem {
        question: "溝通後，動物是不是就會乖乖聽話？",
        answer: "『溝通不是命令』，動物跟我們一樣，有自己的意願與節奏。我們能做的是『傾聽與理解』，並且尊重牠們是否願意分享，以及願意分享的深度與方式～",
    },
];

pub const WHEN_INTRO: &str =
    "很多人以為，動物溝通只有在出現「問題」時才需要，但其實，它更像是一種日常的「傾聽」。想知道牠在想什麼，或單純想和牠更靠近一點，動物溝通都可以發揮力量。";

pub const WHEN_TO_USE: [&str; 6] = [
    "想知道動物對生活或某件事的感受？",
    "想知道動物們彼此之間相處的如何？",
    "想知道動物想對你說什麼？",
    "想對動物表達深深的愛意～",
    "想透過溝通讓彼此的心更貼近～",
    "想單純的閒聊～",
];

pub const WHEN_CLOSING: &str = "其實，無論什麼時候，只要願意敞開心去傾聽，就是最棒的時機！";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_counts_match_the_page() {
        assert_eq!(STORIES.len(), 4);
        assert_eq!(SERVICE_CARDS.len(), 3);
        assert_eq!(QA_ITEMS.len(), 5);
        assert_eq!(WHEN_TO_USE.len(), 6);
    }

    #[test]
    fn external_links_are_absolute() {
        let urls = STORIES
            .iter()
            .map(|s| s.instagram_url)
            .chain([INSTAGRAM_URL, BOOKING_FORM_URL, BOOKING_FORM_LONG_URL]);
        for url in urls {
            assert!(url.starts_with("https://"), "not absolute: {url}");
        }
    }
}
