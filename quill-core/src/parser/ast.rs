use std::fmt::Display;

use crate::{
    lexer::prelude::{LexResult, Token},
    parser::prelude::{parse_error, Parse, ParseError, ParseErrorType, Parser},
    utils::prelude::SrcSpan
};

// program -> { <statement> }
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Program {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let start = match &parser.current_token {
            Some((start, _, _)) => *start,
            None => 0
        };

        let mut body = vec![];

        loop {
            match &parser.current_token {
                Some((_, Token::Eof, _)) => break,
                Some(_) => body.push(Statement::parse(parser)?),
                None => return parse_error(
                    ParseErrorType::UnexpectedEof,
                    SrcSpan { start: 0, end: 0 }
                )
            }
        }

        let (_, end) = parser.expect_one(Token::Eof)?;

        Ok(Self {
            body,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self.body.iter()
            .map(|statement| format!("{}", statement))
            .collect::<Vec<String>>();

        write!(f, "{}", body.join(" "))
    }
}

// statement -> <var_declaration> | <function_declaration> | <expression> [;]
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VarDeclaration(VarDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    Expression(Expression),
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Statement {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let res = match &parser.current_token {
            Some((_, Token::Let, _))
            | Some((_, Token::Const, _)) => Self::VarDeclaration(VarDeclaration::parse(parser)?),
            Some((_, Token::Fn, _)) => Self::FunctionDeclaration(FunctionDeclaration::parse(parser)?),
            Some(_) => {
                let expression = Expression::parse(parser)?;

                // bare expressions need no terminator, but one is tolerated
                if matches!(parser.current_token, Some((_, Token::Semicolon, _))) {
                    parser.step();
                }

                Self::Expression(expression)
            },
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        Ok(res)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VarDeclaration(declaration) => write!(f, "{declaration}"),
            Self::FunctionDeclaration(declaration) => write!(f, "{declaration}"),
            Self::Expression(expression) => write!(f, "{expression};")
        }
    }
}

impl Statement {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::VarDeclaration(declaration) => declaration.location,
            Self::FunctionDeclaration(declaration) => declaration.location,
            Self::Expression(expression) => expression.location()
        }
    }
}

// var_declaration -> (let | const) <identifier> [= <expression>] ;
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclaration {
    pub constant: bool,
    pub name: String,
    pub value: Option<Expression>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for VarDeclaration {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, constant) = match &parser.current_token {
            Some((_, Token::Const, _)) => (parser.expect_one(Token::Const)?.0, true),
            _ => (parser.expect_one(Token::Let)?.0, false)
        };

        let (_, name, _) = parser.expect_ident()?;

        if matches!(parser.current_token, Some((_, Token::Semicolon, _))) {
            let (_, end) = parser.expect_one(Token::Semicolon)?;

            if constant {
                return parse_error(
                    ParseErrorType::MissingConstInitializer,
                    SrcSpan { start, end }
                );
            }

            return Ok(Self {
                constant,
                name,
                value: None,
                location: SrcSpan { start, end }
            });
        }

        parser.expect_one(Token::Assign)?;

        let value = Expression::parse(parser)?;

        let end = match parser.expect_one(Token::Semicolon) {
            Ok((_, end)) => end,
            Err(_) => {
                let end = value.location().end;
                return parse_error(
                    ParseErrorType::MissingSemicolon,
                    SrcSpan { start: end, end: end + 1 }
                );
            }
        };

        Ok(Self {
            constant,
            name,
            value: Some(value),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for VarDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = if self.constant { "const" } else { "let" };

        match &self.value {
            Some(value) => write!(f, "{} {} = {};", keyword, self.name, value),
            None => write!(f, "{} {};", keyword, self.name)
        }
    }
}

// function_declaration -> fn <identifier> ( [<identifier> {, <identifier>}] ) { { <statement> } }
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for FunctionDeclaration {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Fn)?;
        let (_, name, _) = parser.expect_ident()?;

        parser.expect_one(Token::LParen)?;

        let mut parameters = vec![];

        if !matches!(parser.current_token, Some((_, Token::RParen, _))) {
            parameters.push(parser.expect_ident()?.1);

            while let Ok(_) = parser.expect_one(Token::Comma) {
                parameters.push(parser.expect_ident()?.1);
            }
        }

        parser.expect_one(Token::RParen)?;
        parser.expect_one(Token::LBrace)?;

        let mut body = vec![];

        loop {
            match &parser.current_token {
                Some((_, Token::RBrace, _)) => break,
                Some((_, Token::Eof, _))
                | None => return parse_error(
                    ParseErrorType::UnexpectedEof,
                    SrcSpan { start: 0, end: 0 }
                ),
                Some(_) => body.push(Statement::parse(parser)?)
            }
        }

        let (_, end) = parser.expect_one(Token::RBrace)?;

        Ok(Self {
            name,
            parameters,
            body,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for FunctionDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self.body.iter()
            .map(|statement| format!("{}", statement))
            .collect::<Vec<String>>();

        write!(f, "fn {}({}) {{ {} }}", self.name, self.parameters.join(", "), body.join(" "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%"
        };

        write!(f, "{operator}")
    }
}

// expression -> <assignment>
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Assignment(Assignment),
    Binary(Binary),
    Identifier(Identifier),
    Member(Member),
    Call(Call),
    NumberLiteral(NumberLiteral),
    ObjectLiteral(ObjectLiteral),
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Expression {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        Self::parse_assignment(parser)
    }
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Assignment(assignment) => assignment.location,
            Self::Binary(binary) => binary.location,
            Self::Identifier(identifier) => identifier.location,
            Self::Member(member) => member.location,
            Self::Call(call) => call.location,
            Self::NumberLiteral(literal) => literal.location,
            Self::ObjectLiteral(literal) => literal.location
        }
    }

    // assignment -> <object> [= <assignment>]
    fn parse_assignment<T: Iterator<Item = LexResult>>(
        parser: &mut Parser<T>
    ) -> Result<Self, ParseError> {
        let assignee = Self::parse_object(parser)?;

        if matches!(parser.current_token, Some((_, Token::Assign, _))) {
            parser.step();

            // right-associative, allows a = b = c
            let value = Self::parse_assignment(parser)?;

            let location = SrcSpan {
                start: assignee.location().start,
                end: value.location().end
            };

            return Ok(Self::Assignment(Assignment {
                assignee: Box::new(assignee),
                value: Box::new(value),
                location
            }));
        }

        Ok(assignee)
    }

    // object -> { [<property> {, <property>}] } | <additive>
    fn parse_object<T: Iterator<Item = LexResult>>(
        parser: &mut Parser<T>
    ) -> Result<Self, ParseError> {
        if !matches!(parser.current_token, Some((_, Token::LBrace, _))) {
            return Self::parse_additive(parser);
        }

        let (start, _) = parser.expect_one(Token::LBrace)?;

        let mut properties = vec![];

        loop {
            match &parser.current_token {
                Some((_, Token::RBrace, _)) => break,
                Some((_, Token::Eof, _))
                | None => return parse_error(
                    ParseErrorType::UnexpectedEof,
                    SrcSpan { start: 0, end: 0 }
                ),
                Some(_) => {}
            }

            let (key_start, key, key_end) = parser.expect_ident()?;

            // { key, ... } -- shorthand, value picked up from scope
            if matches!(parser.current_token, Some((_, Token::Comma, _))) {
                parser.step();
                properties.push(Property {
                    key,
                    value: None,
                    location: SrcSpan { start: key_start, end: key_end }
                });
                continue;
            }

            // { key } -- shorthand at the end of the literal
            if matches!(parser.current_token, Some((_, Token::RBrace, _))) {
                properties.push(Property {
                    key,
                    value: None,
                    location: SrcSpan { start: key_start, end: key_end }
                });
                continue;
            }

            // { key: value }
            parser.expect_one(Token::Colon)?;

            let value = Expression::parse(parser)?;
            let value_end = value.location().end;

            properties.push(Property {
                key,
                value: Some(value),
                location: SrcSpan { start: key_start, end: value_end }
            });

            if !matches!(parser.current_token, Some((_, Token::RBrace, _))) {
                parser.expect_one(Token::Comma)?;
            }
        }

        let (_, end) = parser.expect_one(Token::RBrace)?;

        Ok(Self::ObjectLiteral(ObjectLiteral {
            properties,
            location: SrcSpan { start, end }
        }))
    }

    // additive -> <multiplicative> {(+ | -) <multiplicative>}
    fn parse_additive<T: Iterator<Item = LexResult>>(
        parser: &mut Parser<T>
    ) -> Result<Self, ParseError> {
        let mut left = Self::parse_multiplicative(parser)?;

        loop {
            let operator = match &parser.current_token {
                Some((_, Token::Plus, _)) => BinaryOperator::Add,
                Some((_, Token::Minus, _)) => BinaryOperator::Subtract,
                _ => break
            };

            parser.step();

            let right = Self::parse_multiplicative(parser)?;

            let location = SrcSpan {
                start: left.location().start,
                end: right.location().end
            };

            left = Self::Binary(Binary {
                left: Box::new(left),
                operator,
                right: Box::new(right),
                location
            });
        }

        Ok(left)
    }

    // multiplicative -> <call_member> {(* | / | %) <call_member>}
    fn parse_multiplicative<T: Iterator<Item = LexResult>>(
        parser: &mut Parser<T>
    ) -> Result<Self, ParseError> {
        let mut left = Self::parse_call_member(parser)?;

        loop {
            let operator = match &parser.current_token {
                Some((_, Token::Asterisk, _)) => BinaryOperator::Multiply,
                Some((_, Token::Slash, _)) => BinaryOperator::Divide,
                Some((_, Token::Percent, _)) => BinaryOperator::Modulo,
                _ => break
            };

            parser.step();

            let right = Self::parse_call_member(parser)?;

            let location = SrcSpan {
                start: left.location().start,
                end: right.location().end
            };

            left = Self::Binary(Binary {
                left: Box::new(left),
                operator,
                right: Box::new(right),
                location
            });
        }

        Ok(left)
    }

    // call_member -> <member> [<call>]
    fn parse_call_member<T: Iterator<Item = LexResult>>(
        parser: &mut Parser<T>
    ) -> Result<Self, ParseError> {
        let member = Self::parse_member(parser)?;

        if matches!(parser.current_token, Some((_, Token::LParen, _))) {
            return Self::parse_call(parser, member);
        }

        Ok(member)
    }

    // call -> ( [<assignment> {, <assignment>}] ) [<call>]
    fn parse_call<T: Iterator<Item = LexResult>>(
        parser: &mut Parser<T>,
        caller: Expression
    ) -> Result<Self, ParseError> {
        let start = caller.location().start;

        let (arguments, end) = Self::parse_arguments(parser)?;

        let mut call = Self::Call(Call {
            caller: Box::new(caller),
            arguments,
            location: SrcSpan { start, end }
        });

        // chained calls f()()
        if matches!(parser.current_token, Some((_, Token::LParen, _))) {
            call = Self::parse_call(parser, call)?;
        }

        Ok(call)
    }

    fn parse_arguments<T: Iterator<Item = LexResult>>(
        parser: &mut Parser<T>
    ) -> Result<(Vec<Expression>, u32), ParseError> {
        parser.expect_one(Token::LParen)?;

        let mut arguments = vec![];

        if !matches!(parser.current_token, Some((_, Token::RParen, _))) {
            arguments.push(Self::parse_assignment(parser)?);

            while let Ok(_) = parser.expect_one(Token::Comma) {
                arguments.push(Self::parse_assignment(parser)?);
            }
        }

        let (_, end) = parser.expect_one(Token::RParen)?;

        Ok((arguments, end))
    }

    // member -> <primary> {. <identifier> | [ <expression> ]}
    fn parse_member<T: Iterator<Item = LexResult>>(
        parser: &mut Parser<T>
    ) -> Result<Self, ParseError> {
        let mut object = Self::parse_primary(parser)?;

        loop {
            match &parser.current_token {
                Some((_, Token::Dot, _)) => {
                    parser.step();

                    let (_, name, end) = parser.expect_ident()?;

                    let location = SrcSpan {
                        start: object.location().start,
                        end
                    };

                    object = Self::Member(Member {
                        object: Box::new(object),
                        property: MemberProperty::Ident(name),
                        location
                    });
                },
                Some((_, Token::LSBracket, _)) => {
                    parser.step();

                    let property = Expression::parse(parser)?;

                    let (_, end) = parser.expect_one(Token::RSBracket)?;

                    let location = SrcSpan {
                        start: object.location().start,
                        end
                    };

                    object = Self::Member(Member {
                        object: Box::new(object),
                        property: MemberProperty::Computed(Box::new(property)),
                        location
                    });
                },
                _ => break
            }
        }

        Ok(object)
    }

    // primary -> <identifier> | <number> | ( <expression> )
    fn parse_primary<T: Iterator<Item = LexResult>>(
        parser: &mut Parser<T>
    ) -> Result<Self, ParseError> {
        match &parser.current_token {
            Some((_, Token::Ident(_), _)) => {
                let (start, name, end) = parser.expect_ident()?;

                Ok(Self::Identifier(Identifier {
                    name,
                    location: SrcSpan { start, end }
                }))
            },
            Some((start, Token::Number(value), end)) => {
                let literal = NumberLiteral {
                    value: *value,
                    location: SrcSpan { start: *start, end: *end }
                };

                parser.step();

                Ok(Self::NumberLiteral(literal))
            },
            Some((_, Token::LParen, _)) => {
                parser.step();

                let expression = Expression::parse(parser)?;

                parser.expect_one(Token::RParen)?;

                Ok(expression)
            },
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token: token.clone(),
                    expected: vec!["an Identifier, Number or `(`".to_string()]
                },
                SrcSpan { start: *start, end: *end }
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assignment(assignment) => write!(f, "{assignment}"),
            Self::Binary(binary) => write!(f, "{binary}"),
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::Member(member) => write!(f, "{member}"),
            Self::Call(call) => write!(f, "{call}"),
            Self::NumberLiteral(literal) => write!(f, "{literal}"),
            Self::ObjectLiteral(literal) => write!(f, "{literal}")
        }
    }
}

// assignment -> <assignee> = <value>
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub assignee: Box<Expression>,
    pub value: Box<Expression>,
    pub location: SrcSpan
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.assignee, self.value)
    }
}

// binary -> <left> <operator> <right>
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl Display for Binary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemberProperty {
    Ident(String),
    Computed(Box<Expression>),
}

// member -> <object> . <identifier> | <object> [ <expression> ]
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub object: Box<Expression>,
    pub property: MemberProperty,
    pub location: SrcSpan
}

impl Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.property {
            MemberProperty::Ident(name) => write!(f, "{}.{}", self.object, name),
            MemberProperty::Computed(expression) => write!(f, "{}[{}]", self.object, expression)
        }
    }
}

// call -> <caller> ( <arguments> )
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub caller: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub location: SrcSpan
}

impl Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self.arguments.iter()
            .map(|argument| format!("{}", argument))
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.caller, arguments.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub value: f64,
    pub location: SrcSpan
}

impl Display for NumberLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// object_literal -> { <property> {, <property>} }
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLiteral {
    pub properties: Vec<Property>,
    pub location: SrcSpan
}

impl Display for ObjectLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let properties = self.properties.iter()
            .map(|property| format!("{}", property))
            .collect::<Vec<String>>();

        write!(f, "{{ {} }}", properties.join(", "))
    }
}

// property -> <key> | <key> : <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Option<Expression>,
    pub location: SrcSpan
}

impl Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {}", self.key, value),
            None => write!(f, "{}", self.key)
        }
    }
}
