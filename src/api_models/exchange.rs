use serde::{Deserialize, Serialize};

/// AwesomeAPI 返回的单个货币对报价，所有数值都按原样保留为字符串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeQuote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// 上游响应的外层包装，报价嵌套在货币对标签下
#[derive(Debug, Deserialize)]
pub struct UsdBrlEnvelope {
    #[serde(rename = "USDBRL")]
    pub usdbrl: ExchangeQuote,
}

/// /cotacao 对外返回的精简视图，字段名是客户端和服务端之间的契约
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeView {
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "code": "USD",
        "codein": "BRL",
        "name": "Dólar Americano/Real Brasileiro",
        "high": "5.6741",
        "low": "5.6433",
        "varBid": "0.0056",
        "pctChange": "0.1",
        "bid": "5.6500",
        "ask": "5.6530",
        "timestamp": "1722873599",
        "create_date": "2024-08-05 14:59:59"
    }"#;

    #[test]
    fn quote_decodes_with_renamed_fields() {
        let quote: ExchangeQuote = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(quote.code, "USD");
        assert_eq!(quote.var_bid, "0.0056");
        assert_eq!(quote.pct_change, "0.1");
        assert_eq!(quote.bid, "5.6500");
    }

    #[test]
    fn envelope_requires_wrapper_key() {
        let wrapped = format!(r#"{{"USDBRL":{SAMPLE}}}"#);
        let envelope: UsdBrlEnvelope = serde_json::from_str(&wrapped).unwrap();
        assert_eq!(envelope.usdbrl.bid, "5.6500");

        // 顶层直接给报价对象时必须解析失败
        assert!(serde_json::from_str::<UsdBrlEnvelope>(SAMPLE).is_err());
    }

    #[test]
    fn view_round_trip_preserves_bid_text() {
        let quote: ExchangeQuote = serde_json::from_str(SAMPLE).unwrap();
        let view = ExchangeView { value: quote.bid.clone() };
        let encoded = serde_json::to_string(&view).unwrap();
        assert_eq!(encoded, r#"{"value":"5.6500"}"#);

        let decoded: ExchangeView = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.value, quote.bid);
    }

    #[test]
    fn numeric_value_is_a_decode_error() {
        let err = serde_json::from_str::<ExchangeView>(r#"{"value": 123}"#);
        assert!(err.is_err());
    }

    #[test]
    fn quote_with_numeric_bid_is_a_decode_error() {
        let broken = SAMPLE.replace(r#""bid": "5.6500""#, r#""bid": 5.65"#);
        assert!(serde_json::from_str::<ExchangeQuote>(&broken).is_err());
    }
}
