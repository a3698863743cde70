//! FIRST sets, one row per production, then one alternate row per
//! option-dependent production.
//!
//! Canonical variant-record rows describe extensible records; their
//! alternates describe variant records. Const-parameter alternates accept the
//! `CONST` attribute on formal parameters.
//!
//! Generated from the PIM grammar; rows are in the literal table format.

use super::TABLE_LEN;
use crate::{token_set, TokenSet};

pub(super) static FIRST: [TokenSet; TABLE_LEN] = [
    // --- canonical rows ---
    // definitionModule
    token_set![0x00000080, 0x00000000, 0x00000000, 1],
    // import
    token_set![0x00090000, 0x00000000, 0x00000000, 2],
    // qualifiedImport
    token_set![0x00080000, 0x00000000, 0x00000000, 1],
    // unqualifiedImport
    token_set![0x00010000, 0x00000000, 0x00000000, 1],
    // identList
    token_set![0x00000000, 0x00000200, 0x00000000, 1],
    // definition
    token_set![0x10000040, 0x00000050, 0x00000000, 4],
    // constDefinition
    token_set![0x00000000, 0x00000200, 0x00000000, 1],
    // constExpression
    token_set![0x01000000, 0x46003e00, 0x00000880, 11],
    // typeDefinition
    token_set![0x00000000, 0x00000200, 0x00000000, 1],
    // qualident
    token_set![0x00000000, 0x00000200, 0x00000000, 1],
    // formalType
    token_set![0x00000004, 0x00000200, 0x00000000, 2],
    // procedureHeader
    token_set![0x10000000, 0x00000000, 0x00000000, 1],
    // formalParameters
    token_set![0x00000000, 0x00000000, 0x00000080, 1],
    // implementationModule
    token_set![0x00040000, 0x00000000, 0x00000000, 1],
    // programModule
    token_set![0x00800000, 0x00000000, 0x00000000, 1],
    // modulePriority
    token_set![0x00000000, 0x00000000, 0x00000200, 1],
    // block
    token_set![0x10801048, 0x00000050, 0x00000000, 7],
    // declaration
    token_set![0x10800040, 0x00000050, 0x00000000, 5],
    // typeDeclaration
    token_set![0x00000000, 0x00000200, 0x00000000, 1],
    // variableDeclaration
    token_set![0x00000000, 0x00000200, 0x00000000, 1],
    // procedureDeclaration
    token_set![0x10000000, 0x00000000, 0x00000000, 1],
    // moduleDeclaration
    token_set![0x00800000, 0x00000000, 0x00000000, 1],
    // export
    token_set![0x00004000, 0x00000000, 0x00000000, 1],
    // statementSequence
    token_set![0x8022a020, 0x00000381, 0x00000008, 11],
    // statement
    token_set![0x8022a020, 0x00000381, 0x00000000, 10],
    // assignmentOrProcCall
    token_set![0x00000000, 0x00000200, 0x00000000, 1],
    // actualParameters
    token_set![0x00000000, 0x00000000, 0x00000080, 1],
    // expressionList
    token_set![0x01000000, 0x46003e00, 0x00000880, 11],
    // returnStatement
    token_set![0x00000000, 0x00000001, 0x00000000, 1],
    // withStatement
    token_set![0x00000000, 0x00000100, 0x00000000, 1],
    // ifStatement
    token_set![0x00020000, 0x00000000, 0x00000000, 1],
    // caseStatement
    token_set![0x00000020, 0x00000000, 0x00000000, 1],
    // case
    token_set![0x01000000, 0x46003e00, 0x00000880, 11],
    // caseLabelList
    token_set![0x01000000, 0x46003e00, 0x00000880, 11],
    // caseLabels
    token_set![0x01000000, 0x46003e00, 0x00000880, 11],
    // loopStatement
    token_set![0x00200000, 0x00000000, 0x00000000, 1],
    // whileStatement
    token_set![0x00000000, 0x00000080, 0x00000000, 1],
    // repeatStatement
    token_set![0x80000000, 0x00000000, 0x00000000, 1],
    // forStatement
    token_set![0x00008000, 0x00000000, 0x00000000, 1],
    // designator
    token_set![0x00000000, 0x00000200, 0x00000000, 1],
    // selector
    token_set![0x00000000, 0x00000000, 0x00000222, 3],
    // expression
    token_set![0x01000000, 0x46003e00, 0x00000880, 11],
    // simpleExpression
    token_set![0x01000000, 0x46003e00, 0x00000880, 11],
    // term
    token_set![0x01000000, 0x40003e00, 0x00000880, 9],
    // factor
    token_set![0x01000000, 0x40003e00, 0x00000880, 9],
    // designatorOrFuncCall
    token_set![0x00000000, 0x00000200, 0x00000000, 1],
    // setValue
    token_set![0x00000000, 0x00000000, 0x00000800, 1],
    // element
    token_set![0x01000000, 0x46003e00, 0x00000880, 11],
    // formalTypeList
    token_set![0x00000004, 0x00000240, 0x00000000, 3],
    // attributedFormalType
    token_set![0x00000004, 0x00000240, 0x00000000, 3],
    // formalParamList
    token_set![0x00000000, 0x00000240, 0x00000000, 2],
    // formalParams
    token_set![0x00000000, 0x00000240, 0x00000000, 2],
    // type
    token_set![0x58000004, 0x00000202, 0x00000280, 8],
    // derivedOrSubrangeType
    token_set![0x00000000, 0x00000200, 0x00000200, 2],
    // subrangeType
    token_set![0x00000000, 0x00000000, 0x00000200, 1],
    // enumType
    token_set![0x00000000, 0x00000000, 0x00000080, 1],
    // setType
    token_set![0x00000000, 0x00000002, 0x00000000, 1],
    // countableType
    token_set![0x00000000, 0x00000200, 0x00000280, 3],
    // arrayType
    token_set![0x00000004, 0x00000000, 0x00000000, 1],
    // recordType
    token_set![0x40000000, 0x00000000, 0x00000000, 1],
    // pointerType
    token_set![0x08000000, 0x00000000, 0x00000000, 1],
    // procedureType
    token_set![0x10000000, 0x00000000, 0x00000000, 1],
    // fieldListSequence
    token_set![0x00000000, 0x00000200, 0x00000000, 1],
    // fieldList
    token_set![0x00000000, 0x00000200, 0x00000000, 1],
    // variantFieldList
    token_set![0x00000020, 0x00000000, 0x00000000, 1],
    // variant
    token_set![0x01000000, 0x46003e00, 0x00000880, 11],
    // --- alternate rows ---
    // formalTypeList
    token_set![0x00000044, 0x00000240, 0x00000000, 4],
    // attributedFormalType
    token_set![0x00000044, 0x00000240, 0x00000000, 4],
    // formalParamList
    token_set![0x00000040, 0x00000240, 0x00000000, 3],
    // formalParams
    token_set![0x00000040, 0x00000240, 0x00000000, 3],
    // type
    token_set![0x58000004, 0x00000202, 0x00000280, 8],
    // derivedOrSubrangeType
    token_set![0x00000000, 0x00000200, 0x00000200, 2],
    // subrangeType
    token_set![0x00000000, 0x00000000, 0x00000200, 1],
    // enumType
    token_set![0x00000000, 0x00000000, 0x00000080, 1],
    // setType
    token_set![0x00000000, 0x00000002, 0x00000000, 1],
    // countableType
    token_set![0x00000000, 0x00000200, 0x00000280, 3],
    // arrayType
    token_set![0x00000004, 0x00000000, 0x00000000, 1],
    // recordType
    token_set![0x40000000, 0x00000000, 0x00000000, 1],
    // pointerType
    token_set![0x08000000, 0x00000000, 0x00000000, 1],
    // procedureType
    token_set![0x10000000, 0x00000000, 0x00000000, 1],
    // fieldListSequence
    token_set![0x00000020, 0x00000200, 0x00000008, 3],
    // fieldList
    token_set![0x00000020, 0x00000200, 0x00000000, 2],
    // variantFieldList
    token_set![0x00000020, 0x00000000, 0x00000000, 1],
    // variant
    token_set![0x01000000, 0x46003e00, 0x00000880, 11],
];
