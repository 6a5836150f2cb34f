//! Arithmetic expression evaluation.
//!
//! Recursive descent over `+ - * / % ^` (and `**`), parentheses, unary
//! minus, the functions `sqrt sin cos tan log exp abs pow min max`, and
//! the constants `pi` and `e`.

/// Evaluate an arithmetic expression.
pub fn evaluate(expression: &str) -> Result<f64, String> {
    let mut parser = Parser {
        chars: expression.chars().collect(),
        pos: 0,
    };
    let value = parser.expr()?;
    parser.skip_ws();
    if parser.pos < parser.chars.len() {
        return Err(format!(
            "unexpected character '{}' at position {}",
            parser.chars[parser.pos], parser.pos
        ));
    }
    Ok(value)
}

/// Format a result, printing whole numbers without a fraction.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn eat(&mut self, ch: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expr(&mut self) -> Result<f64, String> {
        let mut value = self.term()?;
        loop {
            if self.eat('+') {
                value += self.term()?;
            } else if self.eat('-') {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> Result<f64, String> {
        let mut value = self.unary()?;
        loop {
            self.skip_ws();
            // A single '*'; '**' belongs to the power level below.
            if self.peek() == Some('*') && self.peek_at(1) != Some('*') {
                self.pos += 1;
                value *= self.unary()?;
            } else if self.eat('/') {
                value /= self.unary()?;
            } else if self.eat('%') {
                value %= self.unary()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn unary(&mut self) -> Result<f64, String> {
        if self.eat('-') {
            return Ok(-self.unary()?);
        }
        self.power()
    }

    fn power(&mut self) -> Result<f64, String> {
        let base = self.atom()?;
        self.skip_ws();
        if self.eat('^') {
            return Ok(base.powf(self.unary()?));
        }
        if self.peek() == Some('*') && self.peek_at(1) == Some('*') {
            self.pos += 2;
            return Ok(base.powf(self.unary()?));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<f64, String> {
        self.skip_ws();
        match self.peek() {
            Some('(') => {
                self.pos += 1;
                let value = self.expr()?;
                if !self.eat(')') {
                    return Err("missing closing parenthesis".to_owned());
                }
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) if c.is_ascii_alphabetic() => self.ident(),
            Some(c) => Err(format!("unexpected character '{c}' at position {}", self.pos)),
            None => Err("unexpected end of expression".to_owned()),
        }
    }

    fn number(&mut self) -> Result<f64, String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            self.pos += 1;
        }
        let literal: String = self.chars[start..self.pos].iter().collect();
        literal
            .parse()
            .map_err(|_| format!("invalid number '{literal}'"))
    }

    fn ident(&mut self) -> Result<f64, String> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.pos += 1;
        }
        let name: String = self.chars[start..self.pos].iter().collect();

        match name.as_str() {
            "pi" => return Ok(std::f64::consts::PI),
            "e" => return Ok(std::f64::consts::E),
            _ => {}
        }

        if !self.eat('(') {
            return Err(format!("unknown constant '{name}'"));
        }
        let mut args = vec![self.expr()?];
        while self.eat(',') {
            args.push(self.expr()?);
        }
        if !self.eat(')') {
            return Err(format!("missing closing parenthesis in call to '{name}'"));
        }
        self.call(&name, &args)
    }

    fn call(&self, name: &str, args: &[f64]) -> Result<f64, String> {
        let unary = |f: fn(f64) -> f64| -> Result<f64, String> {
            match args {
                [x] => Ok(f(*x)),
                _ => Err(format!("{name} expects one argument, got {}", args.len())),
            }
        };

        match name {
            "sqrt" => unary(f64::sqrt),
            "sin" => unary(f64::sin),
            "cos" => unary(f64::cos),
            "tan" => unary(f64::tan),
            "log" => unary(f64::ln),
            "exp" => unary(f64::exp),
            "abs" => unary(f64::abs),
            "pow" => match args {
                [base, exp] => Ok(base.powf(*exp)),
                _ => Err(format!("pow expects two arguments, got {}", args.len())),
            },
            "min" => args
                .iter()
                .copied()
                .reduce(f64::min)
                .ok_or_else(|| "min expects at least one argument".to_owned()),
            "max" => args
                .iter()
                .copied()
                .reduce(f64::max)
                .ok_or_else(|| "max expects at least one argument".to_owned()),
            _ => Err(format!("unknown function '{name}'")),
        }
    }
}
