// ==========================================
// SMT贴片排产系统 - 飞达匹配引擎
// ==========================================
// 职责: 按 (value, footprint) 为每个元件绑定飞达
// 输入: 元件列表 + 飞达库 (含兜底飞达)
// 输出: 就地补全 part.feeder / part.skip
// ==========================================
// 红线: 无匹配不报错 —— 优雅降级,
// 元件绑定兜底飞达并标记跳过, 排在作业末尾
// ==========================================

use crate::domain::feeder::Feeder;
use crate::domain::part::Part;
use tracing::debug;

// ==========================================
// FeederMatcher - 飞达匹配引擎
// ==========================================
pub struct FeederMatcher {
    // 无状态引擎, 不需要注入依赖
}

impl FeederMatcher {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 为元件列表绑定飞达
    ///
    /// 匹配规则 (依据飞达库列表顺序, 首个匹配胜出):
    /// - value 与 footprint 均相等 (忽略大小写, 去首尾空白)
    /// - 有匹配: skip=false, 绑定该飞达
    /// - 无匹配: skip=true, 绑定兜底飞达 (id=0)
    ///
    /// # 参数
    /// - `parts`: 待匹配的元件列表 (就地修改)
    /// - `feeders`: 飞达库 (加载器已追加兜底飞达)
    pub fn assign(&self, parts: &mut [Part], feeders: &[Feeder]) {
        for part in parts.iter_mut() {
            let matched = feeders
                .iter()
                .find(|feeder| feeder.matches(&part.value, &part.footprint));

            match matched {
                Some(feeder) => {
                    part.skip = false;
                    part.feeder = Some(feeder.clone());
                }
                None => {
                    debug!(
                        "元件 {} ({} / {}) 无飞达匹配, 标记跳过",
                        part.reference, part.value, part.footprint
                    );
                    part.skip = true;
                    part.feeder = feeders.iter().find(|f| f.id == 0).cloned();
                }
            }
        }
    }
}

impl Default for FeederMatcher {
    fn default() -> Self {
        Self::new()
    }
}
