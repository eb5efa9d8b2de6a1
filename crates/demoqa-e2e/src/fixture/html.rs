// Fixture pages
//
// Each handler serves the DOM contract its page object expects: the same
// element ids and classes as the practice site, plus the smallest script
// that produces the behavior the scenarios assert. The shared layout
// carries the sidebar menu and the overlays the cleanup helper strips.

use axum::{
    body::Body,
    http::{Response, StatusCode, header},
};

const MENU: &str = r##"
<div id="fixedban">practice hard - this banner intercepts clicks</div>
<div class="left-pannel">
  <div class="element-group">
    <div class="group-header">Elements</div>
    <ul class="menu-list">
      <li onclick="location.href='/text-box'">Text Box</li>
      <li onclick="location.href='/checkbox'">Check Box</li>
      <li onclick="location.href='/radio-button'">Radio Button</li>
      <li onclick="location.href='/webtables'">Web Tables</li>
      <li onclick="location.href='/buttons'">Buttons</li>
      <li onclick="location.href='/links'">Links</li>
      <li onclick="location.href='/broken'">Broken Links - Images</li>
      <li onclick="location.href='/upload-download'">Upload and Download</li>
      <li onclick="location.href='/dynamic-properties'">Dynamic Properties</li>
    </ul>
  </div>
  <div class="element-group">
    <div class="group-header">Forms</div>
    <ul class="menu-list">
      <li onclick="location.href='/practice-form'">Practice Form</li>
    </ul>
  </div>
</div>
"##;

const FOOTER: &str = r##"<footer><span>© 2026 fixture - tall footer that covers buttons</span></footer>"##;

fn page(title: &str, body: &str) -> Response<Body> {
    let html = format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title>\n\
         <style>#fixedban{{position:fixed;top:0;width:100%;height:25px;background:#eee;}}\
         footer{{position:fixed;bottom:0;width:100%;height:80px;background:#eee;}}\
         .left-pannel{{float:left;width:240px;}}.main-content{{margin-left:260px;}}</style>\
         </head>\n<body>\n{MENU}\n<div class=\"main-content\">{body}</div>\n{FOOTER}\n</body>\n</html>"
    );
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap()
}

pub(super) async fn home_page() -> Response<Body> {
    page(
        "DEMOQA",
        r##"<h1>Practice Site Fixture</h1><p>Pick a category to start.</p>"##,
    )
}

pub(super) async fn elements_page() -> Response<Body> {
    page(
        "Elements",
        r##"<h1 class="text-center">Elements</h1>
<p>Please select an item from left to start practice.</p>"##,
    )
}

pub(super) async fn forms_page() -> Response<Body> {
    page(
        "Forms",
        r##"<h1 class="text-center">Forms</h1>
<p>Please select an item from left to start practice.</p>"##,
    )
}

pub(super) async fn text_box_page() -> Response<Body> {
    page(
        "Text Box",
        r##"<h1>Text Box</h1>
<form id="userForm">
  <input id="userName" placeholder="Full Name">
  <input id="userEmail" placeholder="name@example.com">
  <textarea id="currentAddress" placeholder="Current Address"></textarea>
  <textarea id="permanentAddress" placeholder="Permanent Address"></textarea>
  <button id="submit" type="button">Submit</button>
</form>
<div id="output"></div>
<script>
  document.getElementById('submit').addEventListener('click', () => {
    const v = (id) => document.getElementById(id).value;
    document.getElementById('output').innerHTML =
      '<p id="name">Name:' + v('userName') + '</p>' +
      '<p id="email">Email:' + v('userEmail') + '</p>' +
      '<p id="currentAddress">Current Address :' + v('currentAddress') + '</p>' +
      '<p id="permanentAddress">Permanent Address :' + v('permanentAddress') + '</p>';
  });
</script>"##,
    )
}

pub(super) async fn checkbox_page() -> Response<Body> {
    page(
        "Check Box",
        r##"<h1>Check Box</h1>
<button title="Expand all" class="rct-option rct-option-expand-all">+</button>
<button title="Collapse all" class="rct-option rct-option-collapse-all">-</button>
<div id="treeHost"></div>
<div id="result"></div>
<script>
  const TREE = [
    { id: 'home', label: 'Home', children: [
      { id: 'desktop', label: 'Desktop', children: [
        { id: 'notes', label: 'Notes' },
        { id: 'commands', label: 'Commands' } ] },
      { id: 'documents', label: 'Documents', children: [
        { id: 'workspace', label: 'WorkSpace', children: [
          { id: 'react', label: 'React' },
          { id: 'angular', label: 'Angular' },
          { id: 'veu', label: 'Veu' } ] },
        { id: 'office', label: 'Office', children: [
          { id: 'public', label: 'Public' },
          { id: 'private', label: 'Private' },
          { id: 'classified', label: 'Classified' },
          { id: 'general', label: 'General' } ] } ] },
      { id: 'downloads', label: 'Downloads', children: [
        { id: 'wordFile', label: 'Word File.doc' },
        { id: 'excelFile', label: 'Excel File.doc' } ] } ] }
  ];
  const selected = new Set();

  function renderNode(node) {
    const children = (node.children || []).map(renderNode).join('');
    const childList = children ? '<ol style="display:none">' + children + '</ol>' : '';
    return '<li class="rct-node">' +
      '<label for="tree-node-' + node.id + '">' +
      '<span class="rct-checkbox">&#9744;</span>' +
      '<span class="rct-title">' + node.label + '</span></label>' + childList + '</li>';
  }

  function subtreeIds(node) {
    return [node.id].concat((node.children || []).flatMap(subtreeIds));
  }

  function findNode(nodes, id) {
    for (const node of nodes) {
      if (node.id === id) return node;
      const hit = findNode(node.children || [], id);
      if (hit) return hit;
    }
    return null;
  }

  function updateResult() {
    const order = TREE.flatMap(subtreeIds);
    const picked = order.filter(id => selected.has(id));
    const result = document.getElementById('result');
    result.innerHTML = picked.length
      ? 'You have selected :' + picked.map(id => '<span class="text-success">' + id + '</span>').join('')
      : '';
  }

  function mountTree() {
    const host = document.getElementById('treeHost');
    host.innerHTML = '<ol class="rct-tree">' + TREE.map(renderNode).join('') + '</ol>';
    host.querySelectorAll('label').forEach(label => {
      label.addEventListener('click', (e) => {
        e.preventDefault();
        const id = label.getAttribute('for').replace('tree-node-', '');
        const ids = subtreeIds(findNode(TREE, id));
        const turnOn = !selected.has(id);
        ids.forEach(n => turnOn ? selected.add(n) : selected.delete(n));
        updateResult();
      });
    });
  }

  // The real tree mounts asynchronously; clicking expand-all before the
  // mount does nothing, which is what the page object's retry loop covers.
  setTimeout(mountTree, 700);

  document.querySelector('button[title="Expand all"]').addEventListener('click', () => {
    document.querySelectorAll('#treeHost li.rct-node').forEach(li => {
      li.classList.add('rct-node-expanded');
      li.querySelectorAll(':scope > ol').forEach(ol => ol.style.display = 'block');
    });
  });
  document.querySelector('button[title="Collapse all"]').addEventListener('click', () => {
    document.querySelectorAll('#treeHost li.rct-node').forEach(li => {
      li.classList.remove('rct-node-expanded');
      li.querySelectorAll(':scope > ol').forEach(ol => ol.style.display = 'none');
    });
  });
</script>"##,
    )
}

pub(super) async fn radio_button_page() -> Response<Body> {
    page(
        "Radio Button",
        r##"<h1>Radio Button</h1>
<p>Do you like the site?</p>
<div class="custom-radio">
  <input type="radio" id="yesRadio" class="custom-control-input" name="like" value="Yes">
  <label class="custom-control-label" for="yesRadio">Yes</label>
</div>
<div class="custom-radio">
  <input type="radio" id="impressiveRadio" class="custom-control-input" name="like" value="Impressive">
  <label class="custom-control-label" for="impressiveRadio">Impressive</label>
</div>
<div class="custom-radio">
  <input type="radio" id="noRadio" class="custom-control-input" name="like" value="No" disabled>
  <label class="custom-control-label" for="noRadio">No</label>
</div>
<div id="radioResult"></div>
<script>
  document.querySelectorAll('input[name="like"]').forEach(input => {
    input.addEventListener('change', () => {
      document.getElementById('radioResult').innerHTML =
        '<p>You have selected <span class="text-success">' + input.value + '</span></p>';
    });
  });
</script>"##,
    )
}

pub(super) async fn web_tables_page() -> Response<Body> {
    page(
        "Web Tables",
        r##"<h1>Web Tables</h1>
<button id="addNewRecordButton">Add</button>
<div class="rt-table" role="grid">
  <div class="rt-thead">
    <div class="rt-tr">
      <div class="rt-th">First Name</div><div class="rt-th">Last Name</div>
      <div class="rt-th">Age</div><div class="rt-th">Email</div>
      <div class="rt-th">Salary</div><div class="rt-th">Department</div>
      <div class="rt-th">Action</div>
    </div>
  </div>
  <div class="rt-tbody" id="tableBody"></div>
</div>
<div id="registration-modal" style="display:none">
  <div class="modal-content">
    <div class="modal-header">Registration Form</div>
    <input id="firstName" placeholder="First Name">
    <input id="lastName" placeholder="Last Name">
    <input id="userEmail" placeholder="name@example.com">
    <input id="age" placeholder="Age">
    <input id="salary" placeholder="Salary">
    <input id="department" placeholder="Department">
    <button id="submit" type="button">Submit</button>
  </div>
</div>
<script>
  const PAGE_SIZE = 10;
  const records = [
    { firstName: 'Cierra', lastName: 'Vega', age: '39', email: 'cierra@example.com', salary: '10000', department: 'Insurance' },
    { firstName: 'Alden', lastName: 'Cantrell', age: '45', email: 'alden@example.com', salary: '12000', department: 'Compliance' },
    { firstName: 'Kierra', lastName: 'Gentry', age: '29', email: 'kierra@example.com', salary: '2000', department: 'Legal' }
  ];
  let editIndex = null;

  function render() {
    const body = document.getElementById('tableBody');
    const rows = records.map((r, i) =>
      '<div class="rt-tr-group"><div class="rt-tr">' +
      '<div class="rt-td">' + r.firstName + '</div>' +
      '<div class="rt-td">' + r.lastName + '</div>' +
      '<div class="rt-td">' + r.age + '</div>' +
      '<div class="rt-td">' + r.email + '</div>' +
      '<div class="rt-td">' + r.salary + '</div>' +
      '<div class="rt-td">' + r.department + '</div>' +
      '<div class="rt-td"><span title="Edit" data-index="' + i + '">&#9998;</span>' +
      '<span title="Delete" data-index="' + i + '">&#128465;</span></div>' +
      '</div></div>');
    while (rows.length < PAGE_SIZE) {
      rows.push('<div class="rt-tr-group"><div class="rt-tr">' +
        '<div class="rt-td">&nbsp;</div>'.repeat(7) + '</div></div>');
    }
    body.innerHTML = rows.join('');
    body.querySelectorAll('span[title="Delete"]').forEach(span =>
      span.addEventListener('click', () => {
        records.splice(Number(span.dataset.index), 1);
        render();
      }));
    body.querySelectorAll('span[title="Edit"]').forEach(span =>
      span.addEventListener('click', () => openModal(Number(span.dataset.index))));
  }

  function openModal(index) {
    editIndex = index;
    const r = index === null
      ? { firstName: '', lastName: '', age: '', email: '', salary: '', department: '' }
      : records[index];
    document.getElementById('firstName').value = r.firstName;
    document.getElementById('lastName').value = r.lastName;
    document.getElementById('userEmail').value = r.email;
    document.getElementById('age').value = r.age;
    document.getElementById('salary').value = r.salary;
    document.getElementById('department').value = r.department;
    document.getElementById('registration-modal').style.display = 'block';
  }

  document.getElementById('addNewRecordButton').addEventListener('click', () => openModal(null));
  document.getElementById('submit').addEventListener('click', () => {
    const v = (id) => document.getElementById(id).value;
    const record = { firstName: v('firstName'), lastName: v('lastName'), age: v('age'),
      email: v('userEmail'), salary: v('salary'), department: v('department') };
    if (editIndex === null) records.push(record); else records[editIndex] = record;
    document.getElementById('registration-modal').style.display = 'none';
    render();
  });
  render();
</script>"##,
    )
}

pub(super) async fn buttons_page() -> Response<Body> {
    page(
        "Buttons",
        r##"<h1>Buttons</h1>
<button id="doubleClickBtn">Double Click Me</button>
<button id="rightClickBtn">Right Click Me</button>
<button id="dynamicBtn">Click Me</button>
<div id="buttonMessages"></div>
<script>
  // The third button gets a fresh id on every load; only its text is stable.
  document.getElementById('dynamicBtn').id = 'btn' + Math.random().toString(36).slice(2, 8);

  function say(id, text) {
    if (!document.getElementById(id)) {
      const p = document.createElement('p');
      p.id = id;
      document.getElementById('buttonMessages').appendChild(p);
    }
    document.getElementById(id).textContent = text;
  }

  document.getElementById('doubleClickBtn').addEventListener('dblclick',
    () => say('doubleClickMessage', 'You have done a double click'));
  document.getElementById('rightClickBtn').addEventListener('contextmenu', (e) => {
    e.preventDefault();
    say('rightClickMessage', 'You have done a right click');
  });
  document.querySelectorAll('button').forEach(b => {
    if (b.textContent === 'Click Me') {
      b.addEventListener('click', () => say('dynamicClickMessage', 'You have done a dynamic click'));
    }
  });
</script>"##,
    )
}

pub(super) async fn links_page() -> Response<Body> {
    page(
        "Links",
        r##"<h1>Links</h1>
<p>Following links will open new tab</p>
<a href="/" id="simpleLink" target="_blank">Home</a>
<a href="/" id="dynamicLink" target="_blank">Home (new window)</a>
<p>Following links will send an api call</p>
<a href="javascript:void(0)" id="created">Created</a>
<a href="javascript:void(0)" id="no-content">No Content</a>
<a href="javascript:void(0)" id="moved">Moved</a>
<a href="javascript:void(0)" id="bad-request">Bad Request</a>
<a href="javascript:void(0)" id="unauthorized">Unauthorized</a>
<a href="javascript:void(0)" id="forbidden">Forbidden</a>
<a href="javascript:void(0)" id="invalid-url">Not Found</a>
<p id="linkResponse"></p>
<script>
  const API_LINKS = {
    'created': '/created', 'no-content': '/no-content', 'moved': '/moved',
    'bad-request': '/bad-request', 'unauthorized': '/unauthorized',
    'forbidden': '/forbidden', 'invalid-url': '/invalid-url'
  };
  Object.entries(API_LINKS).forEach(([id, path]) => {
    document.getElementById(id).addEventListener('click', async () => {
      const response = await fetch(path);
      document.getElementById('linkResponse').innerHTML =
        'Link has responded with status ' + response.status +
        ' and status text ' + response.statusText;
    });
  });
</script>"##,
    )
}

pub(super) async fn broken_page() -> Response<Body> {
    page(
        "Broken Links - Images",
        r##"<h1>Broken Links - Images</h1>
<p>Valid image</p>
<img src="/images/Toolsqa.jpg" alt="valid">
<p>Broken image</p>
<img src="/images/Toolsqa_1.jpg" alt="broken">
<p>Valid Link</p>
<a href="/">Click Here for Valid Link</a>
<p>Broken Link</p>
<a href="/status/500">Click Here for Broken Link</a>"##,
    )
}

pub(super) async fn upload_download_page() -> Response<Body> {
    page(
        "Upload and Download",
        r##"<h1>Upload and Download</h1>
<a id="downloadButton" href="/download/sampleFile.jpeg" download="sampleFile.jpeg">Download</a>
<div>
  <label for="uploadFile">Select a file</label>
  <input id="uploadFile" type="file">
  <p id="uploadedFilePath" style="display:none"></p>
</div>
<script>
  document.getElementById('uploadFile').addEventListener('change', (e) => {
    const echoed = document.getElementById('uploadedFilePath');
    echoed.textContent = e.target.value;
    echoed.style.display = 'block';
  });
</script>"##,
    )
}

pub(super) async fn dynamic_properties_page() -> Response<Body> {
    page(
        "Dynamic Properties",
        r##"<h1>Dynamic Properties</h1>
<p id="placeholderRandomId">This text has random Id</p>
<button id="enableAfter" disabled>Will enable 5 seconds</button>
<button id="colorChange" class="mt-4 btn btn-primary">Color Change</button>
<button id="visibleAfter" style="display:none">Visible After 5 Seconds</button>
<script>
  document.getElementById('placeholderRandomId').id =
    'rid' + Math.random().toString(36).slice(2, 8);
  setTimeout(() => document.getElementById('enableAfter').disabled = false, 1500);
  setTimeout(() => document.getElementById('colorChange').classList.add('text-danger'), 1500);
  setTimeout(() => document.getElementById('visibleAfter').style.display = 'inline-block', 1500);
</script>"##,
    )
}

pub(super) async fn practice_form_page() -> Response<Body> {
    page(
        "Practice Form",
        r##"<h1>Practice Form</h1>
<form id="userForm">
  <input id="firstName" placeholder="First Name">
  <input id="lastName" placeholder="Last Name">
  <input id="userEmail" placeholder="name@example.com">
  <div class="custom-radio">
    <input type="radio" id="gender-radio-1" class="custom-control-input" name="gender" value="Male">
    <label class="custom-control-label" for="gender-radio-1">Male</label>
  </div>
  <div class="custom-radio">
    <input type="radio" id="gender-radio-2" class="custom-control-input" name="gender" value="Female">
    <label class="custom-control-label" for="gender-radio-2">Female</label>
  </div>
  <div class="custom-radio">
    <input type="radio" id="gender-radio-3" class="custom-control-input" name="gender" value="Other">
    <label class="custom-control-label" for="gender-radio-3">Other</label>
  </div>
  <input id="userNumber" placeholder="Mobile Number">
  <input id="dateOfBirthInput" placeholder="Date of Birth">
  <input id="subjectsInput" placeholder="Subjects">
  <div id="subjectsContainer"></div>
  <div class="custom-checkbox">
    <input type="checkbox" id="hobbies-checkbox-1" class="custom-control-input" value="Sports">
    <label class="custom-control-label" for="hobbies-checkbox-1">Sports</label>
  </div>
  <div class="custom-checkbox">
    <input type="checkbox" id="hobbies-checkbox-2" class="custom-control-input" value="Reading">
    <label class="custom-control-label" for="hobbies-checkbox-2">Reading</label>
  </div>
  <div class="custom-checkbox">
    <input type="checkbox" id="hobbies-checkbox-3" class="custom-control-input" value="Music">
    <label class="custom-control-label" for="hobbies-checkbox-3">Music</label>
  </div>
  <input type="file" id="uploadPicture">
  <textarea id="currentAddress" placeholder="Current Address"></textarea>
  <select id="state">
    <option value="">Select State</option>
    <option>NCR</option>
    <option>Uttar Pradesh</option>
    <option>Haryana</option>
    <option>Rajasthan</option>
  </select>
  <select id="city">
    <option value="">Select City</option>
  </select>
  <button id="submit" type="button">Submit</button>
</form>
<div id="practiceFormModal" style="display:none">
  <div class="modal-content">
    <div id="example-modal-sizes-title-lg">Thanks for submitting the form</div>
    <table class="table"><tbody id="modalBody"></tbody></table>
    <button id="closeLargeModal">Close</button>
  </div>
</div>
<script>
  const CITIES = {
    'NCR': ['Delhi', 'Gurgaon', 'Noida'],
    'Uttar Pradesh': ['Agra', 'Lucknow', 'Merrut'],
    'Haryana': ['Karnal', 'Panipat'],
    'Rajasthan': ['Jaipur', 'Jaiselmer']
  };
  const subjects = [];

  document.getElementById('state').addEventListener('change', (e) => {
    document.getElementById('city').innerHTML =
      '<option value="">Select City</option>' +
      (CITIES[e.target.value] || []).map(c => '<option>' + c + '</option>').join('');
  });

  document.getElementById('subjectsInput').addEventListener('keydown', (e) => {
    if (e.key !== 'Enter') return;
    e.preventDefault();
    const value = e.target.value.trim();
    if (value) {
      subjects.push(value);
      const chip = document.createElement('span');
      chip.className = 'subjects-chip';
      chip.textContent = value;
      document.getElementById('subjectsContainer').appendChild(chip);
    }
    e.target.value = '';
  });

  document.getElementById('submit').addEventListener('click', () => {
    const v = (id) => document.getElementById(id).value;
    const gender = document.querySelector('input[name="gender"]:checked');
    const hobbies = Array.from(
      document.querySelectorAll('input[type="checkbox"].custom-control-input:checked')
    ).map(el => el.value).join(', ');
    const picture = v('uploadPicture').split('\\').pop();
    const rows = [
      ['Student Name', (v('firstName') + ' ' + v('lastName')).trim()],
      ['Student Email', v('userEmail')],
      ['Gender', gender ? gender.value : ''],
      ['Mobile', v('userNumber')],
      ['Date of Birth', v('dateOfBirthInput')],
      ['Subjects', subjects.join(', ')],
      ['Hobbies', hobbies],
      ['Picture', picture],
      ['Address', v('currentAddress')],
      ['State and City', (v('state') + ' ' + v('city')).trim()]
    ];
    document.getElementById('modalBody').innerHTML = rows
      .map(([label, value]) => '<tr><td>' + label + '</td><td>' + value + '</td></tr>')
      .join('');
    document.getElementById('practiceFormModal').style.display = 'block';
  });

  document.getElementById('closeLargeModal').addEventListener('click', () => {
    document.getElementById('practiceFormModal').style.display = 'none';
  });
</script>"##,
    )
}
