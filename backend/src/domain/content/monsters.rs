//! The monster catalog.
//!
//! Four monsters, each bound to one family of discretionary spending
//! categories via substring keywords. Order matters: `BattleService`
//! matches first-to-last, and the idle fallback must stay last.

use crate::domain::models::monster::Monster;

pub const MONSTERS: &[Monster] = &[
    Monster {
        id: "delivery-imp",
        name: "야식귀",
        description: "배달앱 알림 소리를 먹고 자라는 요괴. 비 오는 날 특히 강해진다.",
        tip: "주문 전에 냉장고를 한 번만 열어 보세요. 재료가 기다리고 있을지도 몰라요.",
        image: "monster_delivery.png",
        max_hp: 10,
        target_category: "배달/외식",
        keywords: &["배달", "외식", "야식", "치킨"],
    },
    Monster {
        id: "impulse-golem",
        name: "지름신",
        description: "장바구니에 담긴 물건의 수만큼 몸집이 커지는 골렘.",
        tip: "위시리스트에 하루만 묵혀 두면 지름신의 힘이 절반으로 줄어요.",
        image: "monster_shopping.png",
        max_hp: 12,
        target_category: "쇼핑",
        keywords: &["쇼핑", "옷", "의류", "패션"],
    },
    Monster {
        id: "caffeine-slime",
        name: "카페인 슬라임",
        description: "테이크아웃 컵을 모아 성을 쌓는 슬라임. 달콤한 디저트를 좋아한다.",
        tip: "일주일에 한 번은 집에서 내린 커피로 슬라임을 굶겨 보세요.",
        image: "monster_cafe.png",
        max_hp: 8,
        target_category: "카페/간식",
        keywords: &["카페", "커피", "간식", "디저트"],
    },
    // Idle fallback: matches nothing, selected when no other monster does.
    Monster {
        id: "idle-spirit",
        name: "게으른 정령",
        description: "눈에 띄는 과소비가 없을 때 나타나는 한가한 정령.",
        tip: "지금처럼만 유지해도 충분해요. 무지출 데이로 정령을 재워 보세요.",
        image: "monster_idle.png",
        max_hp: 6,
        target_category: "any",
        keywords: &[],
    },
];
