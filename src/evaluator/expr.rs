//! Expression evaluation: literals, operators, control flow, and
//! function application.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::Expr;
use crate::environment::Environment;
use crate::object::{FunctionValue, HashKey, Value};

use super::eval_block_statement;

pub(super) fn eval_expr(expr: &Expr, env: &Rc<RefCell<Environment>>) -> Value {
    match expr {
        Expr::IntegerLiteral { value, .. } => Value::Integer(*value),
        Expr::BooleanLiteral { value, .. } => Value::from_bool(*value),
        Expr::StringLiteral { value, .. } => Value::String(value.clone()),
        Expr::Identifier(ident) => eval_identifier(&ident.value, env),
        Expr::Prefix {
            operator, right, ..
        } => {
            let right = eval_expr(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(operator, right)
        }
        Expr::Infix {
            left,
            operator,
            right,
            ..
        } => {
            let left = eval_expr(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expr(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(operator, left, right)
        }
        Expr::If {
            condition,
            consequence,
            alternative,
            ..
        } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        Expr::FunctionLiteral {
            parameters, body, ..
        } => Value::Function(Rc::new(FunctionValue {
            parameters: parameters.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        })),
        Expr::Call {
            function,
            arguments,
            ..
        } => eval_call_expression(function, arguments, env),
        Expr::ArrayLiteral { elements, .. } => {
            let values = match eval_expressions(elements, env) {
                Ok(values) => values,
                Err(err) => return err,
            };
            Value::Array(Rc::new(RefCell::new(values)))
        }
        Expr::Index { left, index, .. } => {
            let left = eval_expr(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expr(index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(left, index)
        }
        Expr::HashLiteral { pairs, .. } => eval_hash_literal(pairs, env),
    }
}

fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> Value {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = crate::object::builtins::lookup(name) {
        return Value::Builtin(name.to_string(), builtin);
    }
    Value::Error(format!("identifier not found: {name}"))
}

fn eval_prefix_expression(operator: &str, right: Value) -> Value {
    match operator {
        "!" => Value::from_bool(!right.is_truthy()),
        "-" => match right {
            Value::Integer(i) => Value::Integer(-i),
            other => Value::Error(format!("unknown operator: -{}", other.type_name())),
        },
        _ => Value::Error(format!("unknown operator: {operator}{}", right.type_name())),
    }
}

fn eval_infix_expression(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r),
        (Value::Boolean(l), Value::Boolean(r)) => match operator {
            "==" => Value::from_bool(l == r),
            "!=" => Value::from_bool(l != r),
            _ => Value::Error(format!(
                "unknown operator: {} {operator} {}",
                left.type_name(),
                right.type_name()
            )),
        },
        _ if left.type_name() != right.type_name() => Value::Error(format!(
            "type mismatch: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
        _ => Value::Error(format!(
            "unknown operator: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left + right),
        "-" => Value::Integer(left - right),
        "*" => Value::Integer(left * right),
        "/" => Value::Integer(left / right),
        "<" => Value::from_bool(left < right),
        ">" => Value::from_bool(left > right),
        "==" => Value::from_bool(left == right),
        "!=" => Value::from_bool(left != right),
        _ => Value::Error(format!("unknown operator: INTEGER {operator} INTEGER")),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Value {
    match operator {
        "+" => Value::String(format!("{left}{right}")),
        _ => Value::Error(format!("unknown operator: STRING {operator} STRING")),
    }
}

fn eval_if_expression(
    condition: &Expr,
    consequence: &crate::ast::BlockStatement,
    alternative: Option<&crate::ast::BlockStatement>,
    env: &Rc<RefCell<Environment>>,
) -> Value {
    let condition = eval_expr(condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block_statement(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block_statement(alternative, env)
    } else {
        Value::Null
    }
}

fn eval_expressions(exprs: &[Expr], env: &Rc<RefCell<Environment>>) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval_expr(expr, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

fn eval_call_expression(
    function: &Expr,
    arguments: &[Expr],
    env: &Rc<RefCell<Environment>>,
) -> Value {
    let function_value = eval_expr(function, env);
    if function_value.is_error() {
        return function_value;
    }

    let args = match eval_expressions(arguments, env) {
        Ok(args) => args,
        Err(err) => return err,
    };

    apply_function(function_value, args)
}

fn apply_function(function: Value, args: Vec<Value>) -> Value {
    log::debug!(
        "applying function {} to {} argument(s)",
        function.type_name(),
        args.len()
    );
    match function {
        Value::Function(func) => {
            let call_env = Environment::new_enclosed(Rc::clone(&func.env));
            // Argument-count mismatches are not validated: extra
            // arguments are ignored, missing ones leave the
            // corresponding parameter unbound, surfacing later as an
            // "identifier not found" error if the body references it.
            for (param, arg) in func.parameters.iter().zip(args.into_iter()) {
                call_env.borrow_mut().set(param.value.clone(), arg);
            }
            let result = eval_block_statement(&func.body, &call_env);
            match result {
                Value::ReturnValue(inner) => *inner,
                other => other,
            }
        }
        Value::Builtin(_, func) => func(&args),
        other => Value::Error(format!("not a function: {}", other.type_name())),
    }
}

fn eval_index_expression(left: Value, index: Value) -> Value {
    match (&left, &index) {
        (Value::Array(elements), Value::Integer(i)) => {
            let elements = elements.borrow();
            if *i < 0 || *i as usize >= elements.len() {
                Value::Null
            } else {
                elements[*i as usize].clone()
            }
        }
        (Value::Hash(pairs), _) => match index.hash_key() {
            Some(key) => pairs
                .borrow()
                .get(&key)
                .map(|(_, v)| v.clone())
                .unwrap_or(Value::Null),
            None => Value::Error(format!("unusable as hash key: {}", index.type_name())),
        },
        _ => Value::Error(format!("index operator not supported: {}", left.type_name())),
    }
}

fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Rc<RefCell<Environment>>) -> Value {
    let mut map: HashMap<HashKey, (Value, Value)> = HashMap::new();

    for (key_expr, value_expr) in pairs {
        let key = eval_expr(key_expr, env);
        if key.is_error() {
            return key;
        }
        let hash_key = match key.hash_key() {
            Some(hash_key) => hash_key,
            None => return Value::Error(format!("unusable as hash key: {}", key.type_name())),
        };

        let value = eval_expr(value_expr, env);
        if value.is_error() {
            return value;
        }

        map.insert(hash_key, (key, value));
    }

    Value::Hash(Rc::new(RefCell::new(map)))
}
