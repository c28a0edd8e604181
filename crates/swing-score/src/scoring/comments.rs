use super::domain::{LocalizedText, Locale, SwingPhase, Tier};
use std::collections::BTreeMap;

/// Coaching remarks for one measured item.
///
/// `improve` doubles as the single "needs work" remark when `opposite` is absent.
#[derive(Debug, Clone, Copy)]
pub struct ItemComments {
    pub item: &'static str,
    pub good: LocalizedText,
    pub improve: LocalizedText,
    pub opposite: Option<LocalizedText>,
}

impl ItemComments {
    fn text(&self, tier: Tier) -> LocalizedText {
        match tier {
            Tier::Good => self.good,
            Tier::Improve => self.improve,
            Tier::ImproveOpposite => self.opposite.unwrap_or(self.improve),
        }
    }

    fn defined(&self) -> impl Iterator<Item = LocalizedText> + '_ {
        [Some(self.good), Some(self.improve), self.opposite]
            .into_iter()
            .flatten()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PhaseComments {
    pub phase: SwingPhase,
    pub items: &'static [ItemComments],
}

/// Read-only catalog of localized coaching remarks keyed by (phase, item, tier).
#[derive(Debug, Clone, Copy)]
pub struct CommentTable {
    phases: &'static [PhaseComments],
}

impl Default for CommentTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CommentTable {
    pub const fn standard() -> Self {
        Self {
            phases: STANDARD_CATALOG,
        }
    }

    pub fn phases(&self) -> &'static [PhaseComments] {
        self.phases
    }

    pub fn entry(&self, phase: SwingPhase, item: &str) -> Option<&'static ItemComments> {
        self.phases
            .iter()
            .find(|entry| entry.phase == phase)?
            .items
            .iter()
            .find(|entry| entry.item == item)
    }

    pub fn has_opposite(&self, phase: SwingPhase, item: &str) -> bool {
        self.entry(phase, item)
            .map(|entry| entry.opposite.is_some())
            .unwrap_or(false)
    }

    /// Remark for `(phase, item, tier)`. A missing tier-3 remark falls back to tier 2;
    /// an unknown item yields an empty string.
    pub fn comment(
        &self,
        phase: SwingPhase,
        item: &str,
        tier: Tier,
        locale: Locale,
    ) -> &'static str {
        self.entry(phase, item)
            .map(|entry| entry.text(tier).text(locale))
            .unwrap_or("")
    }

    /// Same as [`CommentTable::comment`] but resolves the phase from a raw key first.
    pub fn comment_for_key(
        &self,
        phase: &str,
        item: &str,
        tier: Tier,
        locale: Locale,
    ) -> &'static str {
        match SwingPhase::parse(phase) {
            Some(phase) => self.comment(phase, item, tier, locale),
            None => "",
        }
    }

    /// Every item in the phase with its defined remarks in tier order, blanks dropped.
    pub fn phase_comments(
        &self,
        phase: SwingPhase,
        locale: Locale,
    ) -> BTreeMap<&'static str, Vec<&'static str>> {
        let Some(entry) = self.phases.iter().find(|entry| entry.phase == phase) else {
            return BTreeMap::new();
        };

        entry
            .items
            .iter()
            .map(|item| {
                let texts = item
                    .defined()
                    .map(|text| text.text(locale))
                    .filter(|text| !text.trim().is_empty())
                    .collect();
                (item.item, texts)
            })
            .collect()
    }

    pub fn phase_comments_for_key(
        &self,
        phase: &str,
        locale: Locale,
    ) -> BTreeMap<&'static str, Vec<&'static str>> {
        SwingPhase::parse(phase)
            .map(|phase| self.phase_comments(phase, locale))
            .unwrap_or_default()
    }
}

const fn two(item: &'static str, good: LocalizedText, improve: LocalizedText) -> ItemComments {
    ItemComments {
        item,
        good,
        improve,
        opposite: None,
    }
}

const fn three(
    item: &'static str,
    good: LocalizedText,
    improve: LocalizedText,
    opposite: LocalizedText,
) -> ItemComments {
    ItemComments {
        item,
        good,
        improve,
        opposite: Some(opposite),
    }
}

const fn t(ko: &'static str, en: &'static str) -> LocalizedText {
    LocalizedText::new(ko, en)
}

static STANDARD_CATALOG: &[PhaseComments] = &[
    PhaseComments {
        phase: SwingPhase::Address,
        items: &[
            two(
                "shoulderTilt",
                t(
                    "어깨 기울기가 안정적입니다. 오른쪽 어깨가 자연스럽게 조금 낮게 셋업되어 있어요.",
                    "Shoulder tilt is solid; the trail shoulder sits naturally a little lower.",
                ),
                t(
                    "어깨 기울기를 점검하세요. 오른쪽 어깨를 왼쪽보다 살짝 낮게 두면 올바른 궤도를 만들기 쉽습니다.",
                    "Check your shoulder tilt; set the trail shoulder slightly below the lead shoulder to support a good path.",
                ),
            ),
            three(
                "spineAngle",
                t(
                    "척추 각도가 좋습니다. 엉덩이에서 잘 숙여져 회전할 공간이 확보되었어요.",
                    "Good spine angle; you hinge from the hips and leave room to rotate.",
                ),
                t(
                    "상체가 너무 많이 숙여져 있습니다. 가슴을 조금 세워 균형을 잡아 주세요.",
                    "You are bent over too far; lift the chest a little to stay balanced.",
                ),
                t(
                    "자세가 너무 서 있습니다. 엉덩이를 뒤로 빼며 상체를 조금 더 숙여 주세요.",
                    "Posture is too upright; push the hips back and tilt the chest further over the ball.",
                ),
            ),
            three(
                "kneeFlex",
                t(
                    "무릎 굽힘이 적당해 하체가 안정적입니다.",
                    "Knee flex is just right and the lower body is stable.",
                ),
                t(
                    "무릎이 너무 많이 굽혀져 있습니다. 살짝만 굽혀 탄력 있는 자세를 만드세요.",
                    "Knees are bent too much; ease off so you stay athletic.",
                ),
                t(
                    "다리가 너무 펴져 있습니다. 무릎을 조금 굽혀 체중을 발 앞쪽에 두세요.",
                    "Legs are too straight; add some knee flex and feel the weight toward the balls of your feet.",
                ),
            ),
            two(
                "stanceWidth",
                t(
                    "스탠스 폭이 어깨 너비와 잘 맞습니다.",
                    "Stance width matches your shoulders well.",
                ),
                t(
                    "스탠스 폭을 조정하세요. 발 안쪽이 어깨 너비 정도가 되도록 서는 것이 좋습니다.",
                    "Adjust your stance width; aim for the insides of the feet roughly under the shoulders.",
                ),
            ),
        ],
    },
    PhaseComments {
        phase: SwingPhase::Takeback,
        items: &[
            two(
                "shoulderRotation",
                t(
                    "테이크백에서 어깨가 부드럽게 회전을 시작합니다.",
                    "The shoulders start turning smoothly in the takeback.",
                ),
                t(
                    "테이크백 초반 어깨 회전을 점검하세요. 팔이 아닌 어깨로 클럽을 밀어 주세요.",
                    "Check early shoulder turn; move the club away with the shoulders rather than the hands.",
                ),
            ),
            two(
                "hipRotation",
                t(
                    "골반이 어깨를 따라 알맞게 움직입니다.",
                    "Hips follow the shoulders by the right amount.",
                ),
                t(
                    "테이크백 골반 움직임을 조절하세요. 어깨 회전을 따라 자연스럽게 돌아야 합니다.",
                    "Adjust hip movement in the takeback so it follows the shoulder turn naturally.",
                ),
            ),
            two(
                "armExtension",
                t(
                    "왼팔이 곧게 펴져 넓은 아크를 만들고 있습니다.",
                    "Lead arm stays extended and builds a wide arc.",
                ),
                t(
                    "왼팔이 일찍 굽혀집니다. 팔을 펴서 스윙 아크를 넓게 유지하세요.",
                    "Lead arm folds early; keep it extended to maintain a wide arc.",
                ),
            ),
        ],
    },
    PhaseComments {
        phase: SwingPhase::Backswing,
        items: &[
            two(
                "shoulderRotation",
                t(
                    "백스윙 어깨 회전이 충분합니다.",
                    "Shoulder turn through the backswing is ample.",
                ),
                t(
                    "백스윙 어깨 회전량을 점검하세요. 등이 목표를 향할 때까지 꾸준히 돌려 주세요.",
                    "Check backswing shoulder turn; keep rotating until your back faces the target.",
                ),
            ),
            two(
                "hipRotation",
                t(
                    "골반 회전이 어깨를 잘 받쳐 줍니다.",
                    "Hip turn supports the shoulder turn well.",
                ),
                t(
                    "백스윙 골반 회전을 조절하세요. 너무 많거나 적으면 꼬임이 줄어듭니다.",
                    "Adjust backswing hip turn; too much or too little reduces coil.",
                ),
            ),
            two(
                "leftArmAngle",
                t(
                    "백스윙 중 왼팔 각도가 잘 유지됩니다.",
                    "Lead arm angle holds well through the backswing.",
                ),
                t(
                    "왼팔 각도가 무너집니다. 팔꿈치가 굽지 않도록 유지하세요.",
                    "Lead arm angle breaks down; keep the elbow from folding.",
                ),
            ),
        ],
    },
    PhaseComments {
        phase: SwingPhase::BackswingTop,
        items: &[
            three(
                "shoulderRotation",
                t(
                    "탑에서 어깨 회전이 완성되었습니다.",
                    "Full shoulder turn at the top.",
                ),
                t(
                    "탑에서 어깨가 과하게 회전합니다. 오버스윙이 되지 않도록 조금 줄여 보세요.",
                    "Shoulders over-rotate at the top; trim the turn to avoid an overswing.",
                ),
                t(
                    "탑에서 어깨 회전이 부족합니다. 조금 더 돌아 파워를 모으세요.",
                    "Shoulder turn is short at the top; rotate a little further to load power.",
                ),
            ),
            two(
                "hipRotation",
                t(
                    "탑에서 골반 회전이 적절합니다.",
                    "Hip turn at the top is appropriate.",
                ),
                t(
                    "탑에서 골반 회전을 점검하세요. 하체가 버티면서 적당히 돌아야 합니다.",
                    "Check hip turn at the top; the lower body should resist while turning moderately.",
                ),
            ),
            three(
                "xFactor",
                t(
                    "어깨와 골반의 꼬임이 훌륭합니다.",
                    "Excellent separation between shoulders and hips.",
                ),
                t(
                    "꼬임이 지나치게 큽니다. 허리에 무리가 가지 않도록 골반을 조금 더 돌려 주세요.",
                    "Separation is excessive; let the hips turn a bit more to protect the lower back.",
                ),
                t(
                    "꼬임이 부족합니다. 골반을 잡아 두고 어깨를 더 돌려 보세요.",
                    "Not enough separation; hold the hips and turn the shoulders further.",
                ),
            ),
            two(
                "wristCock",
                t(
                    "손목 코킹이 충분히 이루어졌습니다.",
                    "Wrist hinge is fully set.",
                ),
                t(
                    "손목 코킹을 점검하세요. 탑에서 왼팔과 샤프트가 직각에 가까워야 합니다.",
                    "Check wrist hinge; lead arm and shaft should be close to a right angle at the top.",
                ),
            ),
        ],
    },
    PhaseComments {
        phase: SwingPhase::Downswing,
        items: &[
            two(
                "hipRotation",
                t(
                    "다운스윙을 골반이 먼저 리드합니다.",
                    "The hips lead the downswing.",
                ),
                t(
                    "다운스윙 골반 리드를 점검하세요. 하체가 먼저 목표 방향으로 열려야 합니다.",
                    "Check the hip lead; the lower body should open toward the target first.",
                ),
            ),
            two(
                "shoulderRotation",
                t(
                    "어깨가 닫힌 상태를 잘 유지하고 있습니다.",
                    "Shoulders stay closed nicely on the way down.",
                ),
                t(
                    "어깨가 일찍 열립니다. 골반 다음에 어깨가 따라오도록 순서를 지켜 주세요.",
                    "Shoulders open early; let them follow the hips in sequence.",
                ),
            ),
            three(
                "lagAngle",
                t(
                    "래그가 잘 유지되어 임팩트까지 힘이 저장됩니다.",
                    "Lag is held well, storing energy into impact.",
                ),
                t(
                    "래그를 너무 오래 잡고 있습니다. 임팩트 직전에 자연스럽게 풀어 주세요.",
                    "You hold the lag too long; let it release naturally just before impact.",
                ),
                t(
                    "손목이 일찍 풀립니다(캐스팅). 손목 각을 조금 더 오래 유지하세요.",
                    "Wrists release early (casting); keep the wrist angle a little longer.",
                ),
            ),
        ],
    },
    PhaseComments {
        phase: SwingPhase::Impact,
        items: &[
            three(
                "hipOpen",
                t(
                    "임팩트에서 골반이 잘 열려 있습니다.",
                    "Hips are nicely open at impact.",
                ),
                t(
                    "임팩트에서 골반이 너무 열립니다. 하체가 빠지지 않도록 버텨 주세요.",
                    "Hips are too open at impact; avoid spinning out with the lower body.",
                ),
                t(
                    "임팩트에서 골반 회전이 부족합니다. 다운스윙에서 골반을 더 적극적으로 돌리세요.",
                    "Hips have not cleared at impact; rotate them more actively in the downswing.",
                ),
            ),
            two(
                "shoulderOpen",
                t(
                    "임팩트에서 어깨 정렬이 좋습니다.",
                    "Shoulder alignment at impact is good.",
                ),
                t(
                    "임팩트에서 어깨 열림을 점검하세요. 어깨가 목표와 거의 평행해야 합니다.",
                    "Check shoulder openness at impact; the shoulders should be nearly parallel to the target line.",
                ),
            ),
            three(
                "shaftLean",
                t(
                    "핸드 퍼스트 임팩트가 잘 만들어졌습니다.",
                    "Good hands-forward impact.",
                ),
                t(
                    "샤프트가 과하게 앞으로 기울어 있습니다. 로프트가 지나치게 줄어들 수 있어요.",
                    "Too much forward shaft lean; you are removing too much loft.",
                ),
                t(
                    "샤프트가 뒤로 누워 있습니다(플립). 손이 공보다 앞서도록 해 주세요.",
                    "Shaft leans back at impact (flipping); get the hands ahead of the ball.",
                ),
            ),
        ],
    },
    PhaseComments {
        phase: SwingPhase::FollowThrough,
        items: &[
            two(
                "armExtension",
                t(
                    "팔로스루에서 양팔이 시원하게 뻗어 있습니다.",
                    "Both arms extend freely through the ball.",
                ),
                t(
                    "팔로스루에서 팔이 일찍 접힙니다. 목표 방향으로 길게 뻗어 주세요.",
                    "Arms fold early in the follow-through; extend them toward the target.",
                ),
            ),
            two(
                "shoulderRotation",
                t(
                    "팔로스루 어깨 회전이 충분합니다.",
                    "Shoulders keep turning well through the ball.",
                ),
                t(
                    "팔로스루 어깨 회전을 점검하세요. 가슴이 목표를 향할 때까지 돌아야 합니다.",
                    "Check shoulder rotation after impact; turn until the chest faces the target.",
                ),
            ),
            two(
                "spineAngle",
                t(
                    "팔로스루에서도 척추 각이 잘 유지됩니다.",
                    "Spine angle is maintained through the follow-through.",
                ),
                t(
                    "팔로스루에서 상체가 일찍 일어납니다. 척추 각을 조금 더 유지하세요.",
                    "You stand up early after impact; hold your spine angle a little longer.",
                ),
            ),
        ],
    },
    PhaseComments {
        phase: SwingPhase::Finish,
        items: &[
            two(
                "hipRotation",
                t(
                    "피니시에서 골반이 목표를 향해 완전히 돌았습니다.",
                    "Hips have fully turned to face the target at the finish.",
                ),
                t(
                    "피니시에서 골반 회전이 부족합니다. 벨트 버클이 목표를 향하도록 끝까지 돌리세요.",
                    "Hip rotation is incomplete at the finish; turn until the belt buckle faces the target.",
                ),
            ),
            three(
                "balance",
                t(
                    "피니시 균형이 훌륭합니다. 체중이 왼발에 잘 실려 있어요.",
                    "Great finish balance with the weight on the lead foot.",
                ),
                t(
                    "체중이 오른발에 남아 있습니다. 피니시에서 왼발로 체중을 옮겨 주세요.",
                    "Weight is hanging back; shift it onto the lead foot by the finish.",
                ),
                t(
                    "체중이 목표 방향으로 쏠립니다. 왼발 위에서 균형을 잡고 멈춰 보세요.",
                    "You fall toward the target; finish balanced over the lead foot.",
                ),
            ),
            two(
                "spineTilt",
                t(
                    "피니시 자세가 곧고 편안합니다.",
                    "Finish posture is tall and relaxed.",
                ),
                t(
                    "피니시에서 상체 기울기를 점검하세요. 허리가 과하게 꺾이지 않도록 주의하세요.",
                    "Check your finish tilt; avoid arching the lower back.",
                ),
            ),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phase_has_between_two_and_five_items() {
        let table = CommentTable::standard();
        for phase in SwingPhase::ordered() {
            let entry = table
                .phases()
                .iter()
                .find(|entry| entry.phase == phase)
                .expect("phase present in catalog");
            assert!(
                (2..=5).contains(&entry.items.len()),
                "{phase} has {} items",
                entry.items.len()
            );
        }
    }

    #[test]
    fn no_remark_is_blank() {
        for phase in CommentTable::standard().phases() {
            for item in phase.items {
                for text in item.defined() {
                    assert!(!text.ko.trim().is_empty(), "{}/{}", phase.phase, item.item);
                    assert!(!text.en.trim().is_empty(), "{}/{}", phase.phase, item.item);
                }
            }
        }
    }
}
