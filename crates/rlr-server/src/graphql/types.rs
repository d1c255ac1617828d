use async_graphql::SimpleObject;
use rlr_core::models::setting::{self, Setting};

#[derive(Debug, SimpleObject)]
pub struct StringSetting {
    pub name: String,
    pub value: String,
}

#[derive(Debug, SimpleObject)]
pub struct BooleanSetting {
    pub name: String,
    pub value: bool,
}

#[derive(Debug, SimpleObject)]
#[graphql(name = "SettingType")]
pub struct SettingTypeObject {
    pub name: String,
    #[graphql(name = "type")]
    pub kind: String,
}

/// Collections travel as JSON-encoded strings.
impl From<Setting> for StringSetting {
    fn from(setting: Setting) -> Self {
        Self {
            value: setting.value_string(),
            name: setting.name().to_string(),
        }
    }
}

impl From<Setting> for BooleanSetting {
    fn from(setting: Setting) -> Self {
        let value = matches!(setting, Setting::Boolean { value: true, .. });
        Self {
            name: setting.name().to_string(),
            value,
        }
    }
}

impl From<setting::SettingType> for SettingTypeObject {
    fn from(t: setting::SettingType) -> Self {
        Self {
            name: t.name,
            kind: t.kind.as_str().to_string(),
        }
    }
}
