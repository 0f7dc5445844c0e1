//! エージェント記述子（名前 + 指示文）とペルソナ
//!
//! 指示文は固定値で、ユーザー入力や設定では変わらない。

/// 1 回の実行で使うエージェントの定義（不変）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDescriptor {
    name: &'static str,
    instructions: &'static str,
}

impl AgentDescriptor {
    pub const fn new(name: &'static str, instructions: &'static str) -> Self {
        Self { name, instructions }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// system メッセージとしてそのまま送る指示文
    pub fn instructions(&self) -> &str {
        self.instructions
    }
}

const ECHO: AgentDescriptor = AgentDescriptor::new(
    "Echo Agent",
    "Repeat exactly what the user says, word-for-word, without any additional commentary.",
);

const ASSISTANT: AgentDescriptor = AgentDescriptor::new(
    "Assistant",
    "You are a helpful assistant. Fulfill the user's request clearly and accurately.",
);

/// `-a/--agent` で選ぶペルソナ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Persona {
    /// 入力をそのまま返させる
    #[default]
    Echo,
    /// 依頼に応える汎用アシスタント
    Assistant,
}

impl Persona {
    /// 文字列からペルソナを解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "echo" => Some(Self::Echo),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }

    pub fn descriptor(&self) -> AgentDescriptor {
        match self {
            Self::Echo => ECHO,
            Self::Assistant => ASSISTANT,
        }
    }

    /// 応答の前に表示するラベル
    pub fn response_label(&self) -> &'static str {
        match self {
            Self::Echo => "🪞 Echoed Response:",
            Self::Assistant => "💬 Assistant Response:",
        }
    }
}
