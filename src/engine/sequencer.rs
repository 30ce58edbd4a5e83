// ==========================================
// SMT贴片排产系统 - 元件排序引擎
// ==========================================
// 职责: 同吸嘴元件成段、同飞达取料聚集
// 输入: 已绑定飞达的元件列表
// 输出: 就地排序后的元件列表
// ==========================================

use crate::domain::part::Part;

// ==========================================
// PartSequencer - 元件排序引擎
// ==========================================
pub struct PartSequencer {
    // 无状态引擎, 不需要注入依赖
}

impl PartSequencer {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 排序元件列表
    ///
    /// 排序键:
    /// 1) 吸嘴编码升序 (99 数值最大, 跳过元件聚在末尾)
    /// 2) 飞达编号升序 (同吸嘴内按飞达聚集取料)
    ///
    /// 两键相同的元件相对顺序不作保证
    ///
    /// # 参数
    /// - `parts`: 待排序的元件列表 (就地修改)
    pub fn sort(&self, parts: &mut [Part]) {
        parts.sort_by_key(Part::sort_key);
    }
}

impl Default for PartSequencer {
    fn default() -> Self {
        Self::new()
    }
}
