/// 단위 변환기에서 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    /// 외기 온도
    Temperature,
    /// 탱크 압력
    TankPressure,
    /// LNG 수량(체적/질량/열량)
    LngQuantity,
}

impl QuantityKind {
    /// 메뉴 번호를 물리량으로 매핑한다.
    pub fn from_menu_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(QuantityKind::Temperature),
            2 => Some(QuantityKind::TankPressure),
            3 => Some(QuantityKind::LngQuantity),
            _ => None,
        }
    }
}
