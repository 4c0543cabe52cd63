//! The waka poetry calendar.
//!
//! Two entries per month (the 1st and the 15th), ordered by (month, day).
//! Poems are classical waka in the public domain; translations are the
//! app's own. Entry ids double as favorites keys.

use crate::domain::models::waka::WakaEntry;

pub const WAKA_CALENDAR: &[WakaEntry] = &[
    WakaEntry {
        id: "january-01",
        month: 1,
        day: 1,
        content: "新しき年の始めの初春の今日降る雪のいやしけ吉事",
        translation: "새해가 시작되는 첫봄, 오늘 내리는 눈처럼 좋은 일도 소복이 쌓이기를.",
        tags: &["cheer", "season"],
    },
    WakaEntry {
        id: "january-15",
        month: 1,
        day: 15,
        content: "君がため春の野に出でて若菜摘む我が衣手に雪は降りつつ",
        translation: "그대를 위해 봄 들판에서 어린 나물을 캐는 내 소매에 눈이 내리네.",
        tags: &["love", "season"],
    },
    WakaEntry {
        id: "february-01",
        month: 2,
        day: 1,
        content: "梅の花咲きたる園の青柳は蘰にすべくなりにけらずや",
        translation: "매화 핀 뜰의 푸른 버들가지, 어느새 머리에 꽂을 만큼 자랐구나.",
        tags: &["season", "cheer"],
    },
    WakaEntry {
        id: "february-15",
        month: 2,
        day: 15,
        content: "春の夜の夢ばかりなる手枕にかひなく立たむ名こそ惜しけれ",
        translation: "봄밤의 꿈처럼 덧없는 팔베개에, 부질없이 퍼질 소문이 아깝구나.",
        tags: &["love", "calm"],
    },
    WakaEntry {
        id: "march-01",
        month: 3,
        day: 1,
        content: "久方の光のどけき春の日にしづ心なく花の散るらむ",
        translation: "햇살 한가로운 봄날인데, 벚꽃은 어찌 이리 조급하게 지는 걸까.",
        tags: &["calm", "season"],
    },
    WakaEntry {
        id: "march-15",
        month: 3,
        day: 15,
        content: "世の中に絶えて桜のなかりせば春の心はのどけからまし",
        translation: "세상에 벚꽃이 아예 없었다면 봄날의 마음은 한결 느긋했을 텐데.",
        tags: &["calm", "season"],
    },
    WakaEntry {
        id: "april-01",
        month: 4,
        day: 1,
        content: "花の色は移りにけりないたづらに我が身世にふるながめせしまに",
        translation: "꽃빛은 바래 버렸네, 하염없는 장맛비 속에 세월을 바라보는 사이.",
        tags: &["longing", "rest"],
    },
    WakaEntry {
        id: "april-15",
        month: 4,
        day: 15,
        content: "石走る垂水の上のさわらびの萌え出づる春になりにけるかも",
        translation: "바위 타고 흐르는 폭포 곁 고사리 움트는, 봄이 정말 왔구나.",
        tags: &["cheer", "season"],
    },
    WakaEntry {
        id: "may-01",
        month: 5,
        day: 1,
        content: "ほととぎす鳴きつる方をながむればただ有明の月ぞ残れる",
        translation: "두견새 울던 쪽을 바라보니, 새벽달만 덩그러니 남아 있네.",
        tags: &["moon", "calm"],
    },
    WakaEntry {
        id: "may-15",
        month: 5,
        day: 15,
        content: "夏の夜はまだ宵ながら明けぬるを雲のいづこに月宿るらむ",
        translation: "여름밤은 초저녁인 채 밝아 버렸는데, 달은 구름 어디에 머물까.",
        tags: &["moon", "season"],
    },
    WakaEntry {
        id: "june-01",
        month: 6,
        day: 1,
        content: "春過ぎて夏来にけらし白妙の衣ほすてふ天の香具山",
        translation: "봄이 지나 여름이 온 모양이다, 하얀 옷을 말린다는 아마노카구야마.",
        tags: &["season", "cheer"],
    },
    WakaEntry {
        id: "june-15",
        month: 6,
        day: 15,
        content: "風そよぐならの小川の夕暮れはみそぎぞ夏のしるしなりける",
        translation: "바람 살랑이는 개울가 저물녘, 계욕만이 아직 여름임을 알려 주네.",
        tags: &["calm", "season"],
    },
    WakaEntry {
        id: "july-01",
        month: 7,
        day: 1,
        content: "夏と秋と行きかふ空のかよひぢはかたへ涼しき風や吹くらむ",
        translation: "여름과 가을이 엇갈리는 하늘길, 한쪽에는 서늘한 바람이 불고 있겠지.",
        tags: &["season", "calm"],
    },
    WakaEntry {
        id: "july-15",
        month: 7,
        day: 15,
        content: "天の川もみぢを橋にわたせばやたなばたつめの秋を待つらむ",
        translation: "은하수에 단풍 다리를 놓으려고 직녀는 가을을 기다리는 걸까.",
        tags: &["longing", "moon"],
    },
    WakaEntry {
        id: "august-01",
        month: 8,
        day: 1,
        content: "秋来ぬと目にはさやかに見えねども風の音にぞおどろかれぬる",
        translation: "가을이 온 것이 눈에는 또렷이 보이지 않아도, 바람 소리에 문득 놀라네.",
        tags: &["season", "calm"],
    },
    WakaEntry {
        id: "august-15",
        month: 8,
        day: 15,
        content: "月見れば千々に物こそ悲しけれ我が身一つの秋にはあらねど",
        translation: "달을 보면 온갖 일이 서글퍼지네, 나 혼자만의 가을도 아닌데.",
        tags: &["moon", "longing"],
    },
    WakaEntry {
        id: "september-01",
        month: 9,
        day: 1,
        content: "心あてに折らばや折らむ初霜の置きまどはせる白菊の花",
        translation: "짐작으로나 꺾어 볼까, 첫서리에 섞여 분간이 안 되는 흰 국화꽃.",
        tags: &["season", "calm"],
    },
    WakaEntry {
        id: "september-15",
        month: 9,
        day: 15,
        content: "今来むと言ひしばかりに長月の有明の月を待ち出でつるかな",
        translation: "곧 오겠다던 그 말만 믿고, 구월 새벽달이 뜰 때까지 기다리고 말았네.",
        tags: &["moon", "longing"],
    },
    WakaEntry {
        id: "october-01",
        month: 10,
        day: 1,
        content: "奥山に紅葉踏み分け鳴く鹿の声聞く時ぞ秋は悲しき",
        translation: "깊은 산 단풍을 밟고 우는 사슴 소리를 들을 때, 가을은 서럽다.",
        tags: &["longing", "season"],
    },
    WakaEntry {
        id: "october-15",
        month: 10,
        day: 15,
        content: "このたびは幣も取りあへず手向山紅葉の錦神のまにまに",
        translation: "이번 길엔 폐백도 미처 못 챙겼으니, 단풍 비단을 신의 뜻에 맡기옵니다.",
        tags: &["season", "cheer"],
    },
    WakaEntry {
        id: "november-01",
        month: 11,
        day: 1,
        content: "嵐吹く三室の山のもみぢ葉は竜田の川の錦なりけり",
        translation: "바람 몰아치는 미무로산의 단풍잎은 다쓰타강을 수놓는 비단이었구나.",
        tags: &["season", "cheer"],
    },
    WakaEntry {
        id: "november-15",
        month: 11,
        day: 15,
        content: "山里は冬ぞさびしさまさりける人目も草もかれぬと思へば",
        translation: "산골 마을은 겨울이면 쓸쓸함이 더하네, 발길도 풀도 모두 말라 버리니.",
        tags: &["rest", "longing"],
    },
    WakaEntry {
        id: "december-01",
        month: 12,
        day: 1,
        content: "田子の浦にうち出でて見れば白妙の富士の高嶺に雪は降りつつ",
        translation: "다고 포구에 나와 바라보니, 새하얀 후지 봉우리에 눈이 내리고 있네.",
        tags: &["calm", "season"],
    },
    WakaEntry {
        id: "december-15",
        month: 12,
        day: 15,
        content: "朝ぼらけ有明の月と見るまでに吉野の里に降れる白雪",
        translation: "새벽녘 지새는 달인가 싶을 만큼, 요시노 마을에 내려 쌓인 흰 눈.",
        tags: &["moon", "calm"],
    },
];
