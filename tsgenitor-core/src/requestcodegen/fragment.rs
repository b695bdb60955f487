//! Text templates for the TypeScript fragments of a request function.
//!
//! Every template takes the resolved parameter and the identifier it is bound
//! to. Generated code reads bound values from a `params` object; form data is
//! appended to a `data` variable and path placeholders are replaced in a `url`
//! variable, both expected in the enclosing scope.

use crate::types::Parameter;

/// One member of the `params` type literal
pub(crate) fn signature_field(param: &Parameter, binding: &str, ts_type: &str) -> String {
    // a '*/' inside the description would end the comment early
    let description = param.description.as_deref().unwrap_or("").replace("*/", "*\\/");
    let optional = if param.required { "" } else { "?" };
    format!("\n    /** {description} */\n    {binding}{optional}:{ts_type},")
}

pub(crate) fn form_data_snippet(param: &Parameter, binding: &str) -> String {
    let name = &param.name;
    format!(
        r#"if(params['{binding}']){{
        if(Object.prototype.toString.call(params['{binding}']) === '[object Array]'){{
          for (const item of params['{binding}']) {{
            data.append('{name}',item as any)
          }}
        }} else {{
          data.append('{name}',params['{binding}'] as any)
        }}
      }}
"#
    )
}

pub(crate) fn path_replace_snippet(param: &Parameter, binding: &str) -> String {
    format!(
        "url = url.replace('{{{}}}',params['{binding}']+'')\n",
        param.name
    )
}

/// `'name':params['binding']`, used for query, header and merged body entries
pub(crate) fn key_value_pair(param: &Parameter, binding: &str) -> String {
    format!("'{}':{}", param.name, value_ref(binding))
}

pub(crate) fn value_ref(binding: &str) -> String {
    format!("params['{binding}']")
}
