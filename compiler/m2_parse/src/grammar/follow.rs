//! FOLLOW sets, one row per production, then one alternate row per
//! option-dependent production.
//!
//! Canonical variant-record rows describe variant records; their alternates
//! describe extensible records, where `|` and `ELSE` never follow a field
//! type.
//!
//! Generated from the PIM grammar; rows are in the literal table format.

use super::TABLE_LEN;
use crate::{token_set, TokenSet};

pub(super) static FOLLOW: [TokenSet; TABLE_LEN] = [
    // --- canonical rows ---
    // definitionModule
    token_set![0x00000000, 0x00000000, 0x00002000, 1],
    // import
    token_set![0x10895048, 0x00000050, 0x00000000, 10],
    // qualifiedImport
    token_set![0x10895048, 0x00000050, 0x00000000, 10],
    // unqualifiedImport
    token_set![0x10895048, 0x00000050, 0x00000000, 10],
    // identList
    token_set![0x00000000, 0x00000000, 0x0000010c, 3],
    // definition
    token_set![0x10001040, 0x00000050, 0x00000000, 5],
    // constDefinition
    token_set![0x00000000, 0x00000000, 0x00000008, 1],
    // constExpression
    token_set![0x00000200, 0x00000000, 0x0000041d, 6],
    // typeDefinition
    token_set![0x00000000, 0x00000000, 0x00000008, 1],
    // qualident
    token_set![0x06501f12, 0xbff8002c, 0x00001fff, 39],
    // formalType
    token_set![0x00000000, 0x00000000, 0x00000109, 3],
    // procedureHeader
    token_set![0x00000000, 0x00000000, 0x00000008, 1],
    // formalParameters
    token_set![0x00000000, 0x00000000, 0x00000008, 1],
    // implementationModule
    token_set![0x00000000, 0x00000000, 0x00002000, 1],
    // programModule
    token_set![0x00000000, 0x00000000, 0x00002000, 1],
    // modulePriority
    token_set![0x00000000, 0x00000000, 0x00000008, 1],
    // block
    token_set![0x00000000, 0x00000200, 0x00000000, 1],
    // declaration
    token_set![0x10801048, 0x00000050, 0x00000000, 7],
    // typeDeclaration
    token_set![0x00000000, 0x00000000, 0x00000008, 1],
    // variableDeclaration
    token_set![0x00000000, 0x00000000, 0x00000008, 1],
    // procedureDeclaration
    token_set![0x00000000, 0x00000000, 0x00000008, 1],
    // moduleDeclaration
    token_set![0x00000000, 0x00000000, 0x00000008, 1],
    // export
    token_set![0x10801048, 0x00000050, 0x00000000, 7],
    // statementSequence
    token_set![0x00001c00, 0x00000020, 0x00000040, 5],
    // statement
    token_set![0x00001c00, 0x00000020, 0x00000048, 6],
    // assignmentOrProcCall
    token_set![0x00001c00, 0x00000020, 0x00000048, 6],
    // actualParameters
    token_set![0x06501f12, 0x3ff8002c, 0x0000155d, 33],
    // expressionList
    token_set![0x00000000, 0x00000000, 0x00000500, 2],
    // returnStatement
    token_set![0x00001c00, 0x00000020, 0x00000048, 6],
    // withStatement
    token_set![0x00001c00, 0x00000020, 0x00000048, 6],
    // ifStatement
    token_set![0x00001c00, 0x00000020, 0x00000048, 6],
    // caseStatement
    token_set![0x00001c00, 0x00000020, 0x00000048, 6],
    // case
    token_set![0x00001400, 0x00000000, 0x00000040, 3],
    // caseLabelList
    token_set![0x00000000, 0x00000000, 0x00000004, 1],
    // caseLabels
    token_set![0x00000000, 0x00000000, 0x00000005, 2],
    // loopStatement
    token_set![0x00001c00, 0x00000020, 0x00000048, 6],
    // whileStatement
    token_set![0x00001c00, 0x00000020, 0x00000048, 6],
    // repeatStatement
    token_set![0x00001c00, 0x00000020, 0x00000048, 6],
    // forStatement
    token_set![0x00001c00, 0x00000020, 0x00000048, 6],
    // designator
    token_set![0x06501f12, 0xbff8002c, 0x00001ddd, 36],
    // selector
    token_set![0x06501f12, 0xbff8002c, 0x00001fff, 39],
    // expression
    token_set![0x02001e10, 0x0000002c, 0x0000155d, 17],
    // simpleExpression
    token_set![0x02101e10, 0x01f8002c, 0x0000155d, 24],
    // term
    token_set![0x06101e10, 0x07f8002c, 0x0000155d, 27],
    // factor
    token_set![0x06501f12, 0x3ff8002c, 0x0000155d, 33],
    // designatorOrFuncCall
    token_set![0x06501f12, 0x3ff8002c, 0x0000155d, 33],
    // setValue
    token_set![0x06501f12, 0x3ff8002c, 0x0000155d, 33],
    // element
    token_set![0x00000000, 0x00000000, 0x00001001, 2],
    // formalTypeList
    token_set![0x00000000, 0x00000000, 0x00000100, 1],
    // attributedFormalType
    token_set![0x00000000, 0x00000000, 0x00000101, 2],
    // formalParamList
    token_set![0x00000000, 0x00000000, 0x00000100, 1],
    // formalParams
    token_set![0x00000000, 0x00000000, 0x00000108, 2],
    // type
    token_set![0x00001400, 0x00000000, 0x00000048, 4],
    // derivedOrSubrangeType
    token_set![0x00001400, 0x00000000, 0x00000048, 4],
    // subrangeType
    token_set![0x02001400, 0x00000000, 0x00000049, 6],
    // enumType
    token_set![0x02001400, 0x00000000, 0x00000049, 6],
    // setType
    token_set![0x00001400, 0x00000000, 0x00000048, 4],
    // countableType
    token_set![0x02001400, 0x00000000, 0x00000049, 6],
    // arrayType
    token_set![0x00001400, 0x00000000, 0x00000048, 4],
    // recordType
    token_set![0x00001400, 0x00000000, 0x00000048, 4],
    // pointerType
    token_set![0x00001400, 0x00000000, 0x00000048, 4],
    // procedureType
    token_set![0x00001400, 0x00000000, 0x00000048, 4],
    // fieldListSequence
    token_set![0x00001400, 0x00000000, 0x00000040, 3],
    // fieldList
    token_set![0x00001400, 0x00000000, 0x00000048, 4],
    // variantFieldList
    token_set![0x00001400, 0x00000000, 0x00000048, 4],
    // variant
    token_set![0x00001400, 0x00000000, 0x00000040, 3],
    // --- alternate rows ---
    // formalTypeList
    token_set![0x00000000, 0x00000000, 0x00000100, 1],
    // attributedFormalType
    token_set![0x00000000, 0x00000000, 0x00000101, 2],
    // formalParamList
    token_set![0x00000000, 0x00000000, 0x00000100, 1],
    // formalParams
    token_set![0x00000000, 0x00000000, 0x00000108, 2],
    // type
    token_set![0x00001000, 0x00000000, 0x00000008, 2],
    // derivedOrSubrangeType
    token_set![0x00001000, 0x00000000, 0x00000008, 2],
    // subrangeType
    token_set![0x02001000, 0x00000000, 0x00000009, 4],
    // enumType
    token_set![0x02001000, 0x00000000, 0x00000009, 4],
    // setType
    token_set![0x00001000, 0x00000000, 0x00000008, 2],
    // countableType
    token_set![0x02001000, 0x00000000, 0x00000009, 4],
    // arrayType
    token_set![0x00001000, 0x00000000, 0x00000008, 2],
    // recordType
    token_set![0x00001000, 0x00000000, 0x00000008, 2],
    // pointerType
    token_set![0x00001000, 0x00000000, 0x00000008, 2],
    // procedureType
    token_set![0x00001000, 0x00000000, 0x00000008, 2],
    // fieldListSequence
    token_set![0x00001000, 0x00000000, 0x00000000, 1],
    // fieldList
    token_set![0x00001000, 0x00000000, 0x00000008, 2],
    // variantFieldList
    token_set![0x00000000, 0x00000000, 0x00000000, 0],
    // variant
    token_set![0x00000000, 0x00000000, 0x00000000, 0],
];
