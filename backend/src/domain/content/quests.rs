//! The quest pools.
//!
//! `DAILY_QUEST_POOL` feeds the general seeded selector. Its length (10) is
//! deliberate: the selector steps through indices in increments of 7, and
//! gcd(7, 10) = 1 guarantees the walk visits every index before the attempt
//! budget runs out.
//!
//! `BATTLE_QUEST_POOL` is a separate, smaller pool for the battle screen:
//! the first two entries are the always-on automatic quests, the rest is the
//! manual subset one entry of which is picked per day.

use crate::domain::models::quest::{Quest, QuestDifficulty, QuestKind};

pub const DAILY_QUEST_POOL: &[Quest] = &[
    Quest {
        id: "daily-record-three",
        title: "오늘 지출 3건 기록하기",
        description: "작은 지출도 빠짐없이 가계부에 남겨 보세요.",
        difficulty: QuestDifficulty::Easy,
        kind: QuestKind::Auto,
    },
    Quest {
        id: "daily-no-spend",
        title: "무지출 도전",
        description: "오늘 하루 변동 지출 0원에 도전해 보세요.",
        difficulty: QuestDifficulty::Hard,
        kind: QuestKind::Auto,
    },
    Quest {
        id: "daily-water-not-coffee",
        title: "커피 대신 물 마시기",
        description: "오후의 테이크아웃 한 잔을 물 한 컵으로 바꿔 보세요.",
        difficulty: QuestDifficulty::Easy,
        kind: QuestKind::Manual,
    },
    Quest {
        id: "daily-shopping-list",
        title: "장보기 목록 먼저 쓰기",
        description: "장을 보기 전에 살 것을 적고, 목록에 없는 건 담지 않기.",
        difficulty: QuestDifficulty::Normal,
        kind: QuestKind::Manual,
    },
    Quest {
        id: "daily-check-subscription",
        title: "구독 서비스 하나 점검하기",
        description: "이번 달에 한 번도 안 쓴 구독이 있는지 확인해 보세요.",
        difficulty: QuestDifficulty::Normal,
        kind: QuestKind::Manual,
    },
    Quest {
        id: "daily-no-delivery-app",
        title: "배달앱 열지 않기",
        description: "오늘은 배달앱 아이콘을 건드리지 않기.",
        difficulty: QuestDifficulty::Hard,
        kind: QuestKind::Manual,
    },
    Quest {
        id: "daily-sort-receipts",
        title: "영수증 정리하기",
        description: "지갑과 가방 속 영수증을 꺼내 기록하고 버리기.",
        difficulty: QuestDifficulty::Easy,
        kind: QuestKind::Manual,
    },
    Quest {
        id: "daily-pack-lunch",
        title: "내일 점심 도시락 준비하기",
        description: "한 끼 외식을 도시락으로 바꾸면 몬스터가 약해져요.",
        difficulty: QuestDifficulty::Normal,
        kind: QuestKind::Manual,
    },
    Quest {
        id: "daily-budget-note",
        title: "한 줄 소비 회고 쓰기",
        description: "오늘 가장 아까웠던 지출 하나를 한 줄로 남겨 보세요.",
        difficulty: QuestDifficulty::Easy,
        kind: QuestKind::Manual,
    },
    Quest {
        id: "daily-save-coin",
        title: "비상금 1,000원 저금하기",
        description: "잔돈 천 원을 비상금 계좌로 옮겨 보세요.",
        difficulty: QuestDifficulty::Normal,
        kind: QuestKind::Manual,
    },
];

pub const BATTLE_QUEST_POOL: &[Quest] = &[
    // Fixed automatic slots: always shown, checked off from ledger data.
    Quest {
        id: "battle-keep-ledger",
        title: "가계부 기록하기",
        description: "오늘 지출을 하나라도 기록하면 자동으로 완료돼요.",
        difficulty: QuestDifficulty::Easy,
        kind: QuestKind::Auto,
    },
    Quest {
        id: "battle-no-spend-day",
        title: "무지출 달성하기",
        description: "오늘을 무지출 데이로 표시하면 자동으로 완료돼요.",
        difficulty: QuestDifficulty::Hard,
        kind: QuestKind::Auto,
    },
    // Manual subset: one entry is picked per day by seed.
    Quest {
        id: "battle-saving-vow",
        title: "절약 다짐 쓰기",
        description: "몬스터에게 보내는 절약 다짐을 한 줄 적어 보세요.",
        difficulty: QuestDifficulty::Easy,
        kind: QuestKind::Manual,
    },
    Quest {
        id: "battle-home-coffee",
        title: "집에서 커피 내리기",
        description: "카페인 슬라임을 하루 굶겨 보세요.",
        difficulty: QuestDifficulty::Normal,
        kind: QuestKind::Manual,
    },
    Quest {
        id: "battle-resist-delivery",
        title: "배달 음식 참기",
        description: "야식귀의 유혹을 오늘 하루 견뎌 내기.",
        difficulty: QuestDifficulty::Hard,
        kind: QuestKind::Manual,
    },
    Quest {
        id: "battle-wishlist-rest",
        title: "위시리스트 하루 묵히기",
        description: "사고 싶은 물건을 바로 결제하지 말고 내일 다시 보기.",
        difficulty: QuestDifficulty::Normal,
        kind: QuestKind::Manual,
    },
];
