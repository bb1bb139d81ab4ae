use miniwing_core::UtilityFamily;
use miniwing_resolve::{CssRule, Resolver};
use std::fmt;

/// 单个类名的解析说明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub class_name: String,
    /// 实际生成的规则
    pub rule: Option<CssRule>,
    /// 所有能匹配的家族，第一个为生效者
    pub claimants: Vec<UtilityFamily>,
}

pub fn explain(resolver: &Resolver<'_>, class_name: &str) -> Explanation {
    Explanation {
        class_name: class_name.to_string(),
        rule: resolver.resolve(class_name),
        claimants: resolver.claimants(class_name),
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(rule) = &self.rule else {
            return write!(f, "{}: no matching utility", self.class_name);
        };

        write!(f, "{}", rule)?;
        for (i, family) in self.claimants.iter().enumerate() {
            let marker = if i == 0 { "matched" } else { "shadowed" };
            write!(f, "\n  {} by {}", marker, family.config_key())?;
        }
        Ok(())
    }
}
