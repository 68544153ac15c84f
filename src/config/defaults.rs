pub fn default_version() -> u32 {
    1
}

pub fn default_no_pros() -> String {
    "暂无优点信息".to_string()
}

pub fn default_no_cons() -> String {
    "暂无缺点信息".to_string()
}

pub fn default_plan_name() -> String {
    "默认方案".to_string()
}

pub fn default_plan_pros() -> String {
    "请查看AI返回的完整内容".to_string()
}

pub fn default_plan_cons() -> String {
    "无法解析方案结构".to_string()
}

pub fn default_true() -> bool {
    true
}
