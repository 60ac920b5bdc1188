use crate::error::{Result, ToolError};
use crate::executor::{FunctionExecutor, FunctionExecutorBuilder};
use crate::validation::param_schema;
use mexprp::Answer;
use serde_json::{json, Value};

/// Name the calculator registers under
pub const CALCULATOR_TOOL_NAME: &str = "calculator";

/// Create a calculator tool
///
/// Takes `{"expression": "..."}` and answers with the value as text.
pub fn calculator() -> FunctionExecutor {
    FunctionExecutorBuilder::new(CALCULATOR_TOOL_NAME)
        .description(
            "Useful for getting the result of a math expression. \
             The input should be a valid arithmetic expression such as `(3 + 4) * 2`.",
        )
        .parameters(
            param_schema()
                .string_required("expression", "The arithmetic expression to evaluate")
                .build(),
        )
        .returns("The numeric value of the expression")
        .build_sync(|args: Value| {
            let expression = args["expression"].as_str().unwrap_or_default();
            evaluate(expression).map(|answer| json!(answer))
        })
}

/// Evaluate an arithmetic expression to its textual value
///
/// Expressions with several solutions (`sqrt(4)` is both 2 and -2) list them
/// comma-separated.
pub fn evaluate(expression: &str) -> Result<String> {
    let expression = expression.trim();
    if expression.is_empty() {
        return Err(ToolError::execution(CALCULATOR_TOOL_NAME, "empty expression"));
    }

    match mexprp::eval::<f64>(expression) {
        Ok(Answer::Single(value)) => Ok(value.to_string()),
        Ok(Answer::Multiple(values)) => Ok(values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")),
        Err(e) => Err(ToolError::execution(
            CALCULATOR_TOOL_NAME,
            format!("cannot evaluate `{expression}`: {e}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::ToolExecutor;
    use parley_core::ToolCall;

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("2+2").unwrap(), "4");
        assert_eq!(evaluate(" (3 + 4) * 2 ").unwrap(), "14");
        assert_eq!(evaluate("7 / 2").unwrap(), "3.5");
    }

    #[test]
    fn test_malformed_expression() {
        assert!(evaluate("(2 + 3").is_err());
        assert!(evaluate("   ").is_err());
    }

    #[tokio::test]
    async fn test_calculator_tool() {
        let tool = calculator();
        let call = ToolCall {
            id: "call_1".into(),
            name: CALCULATOR_TOOL_NAME.into(),
            arguments: r#"{"expression":"2+2"}"#.into(),
        };

        let result = tool.execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(result.content, "4");

        let call = ToolCall {
            arguments: r#"{"expression":"(1"}"#.into(),
            ..call
        };
        let result = tool.execute(&call).await.unwrap();
        assert!(!result.success);
        assert!(result.content.contains("cannot evaluate"));
    }
}
